/// Game area (map level).
///
/// Only the areas the agent reasons about are named; everything else is
/// reported as [`Area::Other`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Area {
    // Act 1
    #[default]
    RogueEncampment,
    BloodMoor,
    ColdPlains,
    StonyField,
    DarkWood,
    BlackMarsh,
    Tristram,
    TowerCellarLevel5,
    CatacombsLevel2,
    CatacombsLevel4,
    MooMooFarm,
    // Act 2
    LutGholein,
    ArcaneSanctuary,
    CanyonOfTheMagi,
    DurielsLair,
    // Act 3
    KurastDocks,
    Travincal,
    DuranceOfHateLevel3,
    // Act 4
    ThePandemoniumFortress,
    PlainsOfDespair,
    RiverOfFlame,
    ChaosSanctuary,
    // Act 5
    Harrogath,
    NihlathaksTemple,
    HallsOfVaught,
    ArreatSummit,
    WorldstoneKeepLevel2,
    ThroneOfDestruction,
    WorldstoneChamber,
    Other,
}

impl Area {
    /// Act the area belongs to (1 to 5); `0` for [`Area::Other`].
    pub const fn act(self) -> u8 {
        use Area::*;
        match self {
            RogueEncampment | BloodMoor | ColdPlains | StonyField | DarkWood | BlackMarsh
            | Tristram | TowerCellarLevel5 | CatacombsLevel2 | CatacombsLevel4 | MooMooFarm => 1,
            LutGholein | ArcaneSanctuary | CanyonOfTheMagi | DurielsLair => 2,
            KurastDocks | Travincal | DuranceOfHateLevel3 => 3,
            ThePandemoniumFortress | PlainsOfDespair | RiverOfFlame | ChaosSanctuary => 4,
            Harrogath | NihlathaksTemple | HallsOfVaught | ArreatSummit | WorldstoneKeepLevel2
            | ThroneOfDestruction | WorldstoneChamber => 5,
            Other => 0,
        }
    }
}

/// Game difficulty the character is playing on.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Difficulty {
    #[default]
    Normal,
    Nightmare,
    Hell,
}
