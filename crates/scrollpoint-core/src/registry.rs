#![forbid(unsafe_code)]

//! Checkpoint registry: the ordered, immutable list of section descriptors.
//!
//! The registry is loaded once at startup and never mutated afterwards.
//! Construction validates every structural invariant up front so the rest
//! of the system can rely on them without re-checking:
//!
//! - at least one checkpoint
//! - unique ids
//! - strictly increasing `order`
//! - strictly increasing `target_progress`, all within `[0.0, 1.0]`
//! - the first checkpoint's `target_progress` is exactly 0.0
//!
//! Index 0 is the home checkpoint. In a typical registry it is the only
//! entry without a detail surface, but nothing here requires that.

use crate::theme::SectionTheme;

/// Display metadata for one checkpoint.
///
/// Consumed only by render consumers; the state machine never reads it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayMeta {
    /// Section title ("About Me").
    pub title: String,
    /// Short subtitle ("My Journey").
    pub subtitle: String,
    /// One-line tagline shown on the transitional card.
    pub tagline: String,
    /// Typed color tokens for this section.
    pub theme: SectionTheme,
}

impl DisplayMeta {
    /// Create display metadata with a default theme.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        tagline: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            tagline: tagline.into(),
            theme: SectionTheme::default(),
        }
    }

    /// Set the section theme.
    #[must_use]
    pub fn with_theme(mut self, theme: SectionTheme) -> Self {
        self.theme = theme;
        self
    }
}

/// One discrete stop in the scroll narrative.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CheckpointDescriptor {
    /// Unique identifier ("home", "about", "skills", ...).
    pub id: String,
    /// Position in the navigation sequence; strictly increasing.
    pub order: u32,
    /// The normalized scroll progress this checkpoint is centered on.
    pub target_progress: f32,
    /// Display metadata for render consumers.
    pub display: DisplayMeta,
    /// Whether arriving at this checkpoint activates a full-content
    /// detail surface.
    pub has_detail_surface: bool,
}

impl CheckpointDescriptor {
    /// Create a descriptor with a detail surface.
    #[must_use]
    pub fn new(id: impl Into<String>, order: u32, target_progress: f32, display: DisplayMeta) -> Self {
        Self {
            id: id.into(),
            order,
            target_progress,
            display,
            has_detail_surface: true,
        }
    }

    /// Mark this checkpoint as having no detail surface (the home entry).
    #[must_use]
    pub fn without_detail_surface(mut self) -> Self {
        self.has_detail_surface = false;
        self
    }
}

/// Validation errors for registry construction.
///
/// These indicate a static configuration bug, not a runtime condition;
/// callers typically unwrap the registry at startup.
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryError {
    /// The registry must contain at least one checkpoint.
    Empty,
    /// Two checkpoints share an id.
    DuplicateId { id: String },
    /// `order` values must be strictly increasing.
    NonIncreasingOrder { index: usize },
    /// `target_progress` values must be strictly increasing.
    NonIncreasingTarget { index: usize },
    /// A `target_progress` fell outside `[0.0, 1.0]` or was not finite.
    TargetOutOfRange { index: usize, target: f32 },
    /// The first checkpoint's `target_progress` must be exactly 0.0.
    FirstTargetNotZero { target: f32 },
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "registry must contain at least one checkpoint"),
            Self::DuplicateId { id } => write!(f, "duplicate checkpoint id {id:?}"),
            Self::NonIncreasingOrder { index } => {
                write!(f, "checkpoint {index} breaks strictly increasing order")
            }
            Self::NonIncreasingTarget { index } => write!(
                f,
                "checkpoint {index} breaks strictly increasing target progress"
            ),
            Self::TargetOutOfRange { index, target } => write!(
                f,
                "checkpoint {index} target progress {target} outside [0, 1]"
            ),
            Self::FirstTargetNotZero { target } => {
                write!(f, "first checkpoint must target progress 0.0, got {target}")
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// The ordered, immutable set of checkpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckpointRegistry {
    entries: Vec<CheckpointDescriptor>,
}

impl CheckpointRegistry {
    /// Build a registry, validating every structural invariant.
    pub fn new(entries: Vec<CheckpointDescriptor>) -> Result<Self, RegistryError> {
        if entries.is_empty() {
            return Err(RegistryError::Empty);
        }

        let first = entries[0].target_progress;
        if first != 0.0 {
            return Err(RegistryError::FirstTargetNotZero { target: first });
        }

        for (index, entry) in entries.iter().enumerate() {
            let target = entry.target_progress;
            if !target.is_finite() || !(0.0..=1.0).contains(&target) {
                return Err(RegistryError::TargetOutOfRange { index, target });
            }
            if entries[..index].iter().any(|e| e.id == entry.id) {
                return Err(RegistryError::DuplicateId {
                    id: entry.id.clone(),
                });
            }
            if index > 0 {
                let prev = &entries[index - 1];
                if entry.order <= prev.order {
                    return Err(RegistryError::NonIncreasingOrder { index });
                }
                if target <= prev.target_progress {
                    return Err(RegistryError::NonIncreasingTarget { index });
                }
            }
        }

        Ok(Self { entries })
    }

    /// All checkpoints in navigation order.
    #[must_use]
    pub fn all(&self) -> &[CheckpointDescriptor] {
        &self.entries
    }

    /// Number of checkpoints. Always at least 1.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with slice types.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a checkpoint and its index by id.
    #[must_use]
    pub fn by_id(&self, id: &str) -> Option<(usize, &CheckpointDescriptor)> {
        self.entries
            .iter()
            .enumerate()
            .find(|(_, e)| e.id == id)
    }

    /// Look up a checkpoint by index.
    #[must_use]
    pub fn by_index(&self, index: usize) -> Option<&CheckpointDescriptor> {
        self.entries.get(index)
    }

    /// Fetch a checkpoint at a pre-validated index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range. Callers must have validated the
    /// index against [`len`](Self::len); an out-of-range index here is a
    /// programming error.
    #[must_use]
    pub fn checkpoint(&self, index: usize) -> &CheckpointDescriptor {
        &self.entries[index]
    }

    /// Index of the home checkpoint.
    #[must_use]
    pub fn home(&self) -> usize {
        0
    }

    /// Index of the last checkpoint.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.entries.len() - 1
    }
}
