//! Fixed option catalogs: instruments, musical keys, production statuses, BPM.
//!
//! DESIGN
//! ======
//! Every option list is a closed enum with an `ALL` table in display order.
//! Order is part of the contract: the form, the summary table, and the CSV
//! export all iterate `Instrument::ALL`, and the first entry of each option
//! list is its default. Lists are compile-time constants, so an empty or
//! malformed catalog cannot reach runtime.

use serde::{Serialize, Serializer};

// =============================================================================
// INSTRUMENT
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Instrument {
    BassGuitar,
    AcousticGuitar,
    ElectricGuitar,
    Drums,
    Piano,
    Vocals,
    HandDrums,
    Cajon,
    Tambourine,
    Shaker,
    Maracas,
    WoodBlock,
    SleighBells,
    AuxPercussion,
}

impl Instrument {
    /// Catalog order.
    pub const ALL: [Self; 14] = [
        Self::BassGuitar,
        Self::AcousticGuitar,
        Self::ElectricGuitar,
        Self::Drums,
        Self::Piano,
        Self::Vocals,
        Self::HandDrums,
        Self::Cajon,
        Self::Tambourine,
        Self::Shaker,
        Self::Maracas,
        Self::WoodBlock,
        Self::SleighBells,
        Self::AuxPercussion,
    ];

    /// Position in `ALL`; declaration order and catalog order are the same.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BassGuitar => "Bass Guitar",
            Self::AcousticGuitar => "Acoustic Guitar",
            Self::ElectricGuitar => "Electric Guitar",
            Self::Drums => "Drums",
            Self::Piano => "Piano",
            Self::Vocals => "Vocals",
            Self::HandDrums => "Hand Drums",
            Self::Cajon => "Cajon",
            Self::Tambourine => "Tambourine",
            Self::Shaker => "Shaker",
            Self::Maracas => "Maracas",
            Self::WoodBlock => "Wood Block",
            Self::SleighBells => "Sleigh Bells",
            Self::AuxPercussion => "Aux Percussion",
        }
    }

    /// Widget-safe identifier, e.g. `bass_guitar`.
    #[must_use]
    pub fn slug(self) -> String {
        self.as_str().to_ascii_lowercase().replace(' ', "_")
    }

    /// Exact display-name match.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|i| i.as_str() == name)
    }

    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|i| i.slug() == slug)
    }
}

// =============================================================================
// MUSICAL KEY
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MusicalKey {
    #[default]
    C,
    CSharp,
    D,
    DSharp,
    DFlat,
    E,
    EFlat,
    F,
    FSharp,
    G,
    GSharp,
    GFlat,
    A,
    ASharp,
    AFlat,
    B,
    BFlat,
}

impl MusicalKey {
    pub const ALL: [Self; 17] = [
        Self::C,
        Self::CSharp,
        Self::D,
        Self::DSharp,
        Self::DFlat,
        Self::E,
        Self::EFlat,
        Self::F,
        Self::FSharp,
        Self::G,
        Self::GSharp,
        Self::GFlat,
        Self::A,
        Self::ASharp,
        Self::AFlat,
        Self::B,
        Self::BFlat,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::C => "C",
            Self::CSharp => "C#",
            Self::D => "D",
            Self::DSharp => "D#",
            Self::DFlat => "Db",
            Self::E => "E",
            Self::EFlat => "Eb",
            Self::F => "F",
            Self::FSharp => "F#",
            Self::G => "G",
            Self::GSharp => "G#",
            Self::GFlat => "Gb",
            Self::A => "A",
            Self::ASharp => "A#",
            Self::AFlat => "Ab",
            Self::B => "B",
            Self::BFlat => "Bb",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == name)
    }
}

// =============================================================================
// PRODUCTION STATUS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProductionStatus {
    #[default]
    NeedsRecording,
    NeedsReRecording,
    ScratchTrackRecorded,
    RecordingCompleted,
    ArrangementCompleted,
    EditingCompleted,
    MixingCompleted,
    MasteringCompleted,
    TrackPrinted,
    MusicVideoCreated,
    MusicVideoPublished,
}

impl ProductionStatus {
    pub const ALL: [Self; 11] = [
        Self::NeedsRecording,
        Self::NeedsReRecording,
        Self::ScratchTrackRecorded,
        Self::RecordingCompleted,
        Self::ArrangementCompleted,
        Self::EditingCompleted,
        Self::MixingCompleted,
        Self::MasteringCompleted,
        Self::TrackPrinted,
        Self::MusicVideoCreated,
        Self::MusicVideoPublished,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NeedsRecording => "needs to be recorded",
            Self::NeedsReRecording => "needs to be re-recorded",
            Self::ScratchTrackRecorded => "scratch track recorded",
            Self::RecordingCompleted => "recording completed",
            Self::ArrangementCompleted => "arrangement completed",
            Self::EditingCompleted => "editing completed",
            Self::MixingCompleted => "mixing completed",
            Self::MasteringCompleted => "mastering completed",
            Self::TrackPrinted => "track printed",
            Self::MusicVideoCreated => "music video created",
            Self::MusicVideoPublished => "music video published",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == name)
    }
}

// =============================================================================
// BPM
// =============================================================================

pub const MIN_BPM: u16 = 1;
pub const MAX_BPM: u16 = 300;
pub const DEFAULT_BPM: u16 = 120;

/// Tempo in beats per minute, always within `MIN_BPM..=MAX_BPM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Bpm(u16);

impl Bpm {
    /// Returns `None` outside the inclusive domain.
    #[must_use]
    pub fn new(value: i64) -> Option<Self> {
        let value = u16::try_from(value).ok()?;
        (MIN_BPM..=MAX_BPM).contains(&value).then_some(Self(value))
    }

    #[must_use]
    pub fn get(self) -> u16 {
        self.0
    }
}

impl Default for Bpm {
    fn default() -> Self {
        Self(DEFAULT_BPM)
    }
}

impl std::fmt::Display for Bpm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

// =============================================================================
// SERDE: option lists serialize as their display strings
// =============================================================================

macro_rules! serialize_as_display_name {
    ($ty:ident) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

serialize_as_display_name!(Instrument);
serialize_as_display_name!(MusicalKey);
serialize_as_display_name!(ProductionStatus);

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
