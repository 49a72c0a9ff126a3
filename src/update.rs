#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::{ElementDiff, Error, ItemUpdates};

/// Animation style for inserted or deleted items, the discriminants follow the row animation
/// values of common list widgets
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
#[repr(u8)]
pub enum Animation {
    Fade = 0,
    Right,
    Left,
    Top,
    Bottom,
    None,
    Middle,
    /// Let the widget pick a style
    #[default]
    Automatic = 100,
}

/// A struct controlling how [`update_section`] animates a diff.
///
/// `default_animation` is used for everything unless `delete_animation` or `insert_animation`
/// override it for that kind of change. `default_animation` defaults to [`Animation::Automatic`],
/// the overrides default to `None`.
///
/// E.g.
/// ```
/// use element_diff::{Animation, UpdateConfig};
///
/// let mut config = UpdateConfig::new();
/// config.set_default_animation(Animation::Fade);
/// config.set_insert_animation(Some(Animation::Top));
///
/// assert_eq!(config.delete_animation(), Animation::Fade);
/// assert_eq!(config.insert_animation(), Animation::Top);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UpdateConfig {
    default_animation: Animation,
    delete_animation: Option<Animation>,
    insert_animation: Option<Animation>,
}

impl UpdateConfig {
    /// Creates a new config with [`Animation::Automatic`] for every change
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_animation(&self) -> Animation {
        self.default_animation
    }

    /// Set the animation used for changes without an override
    pub fn set_default_animation(&mut self, animation: Animation) {
        self.default_animation = animation;
    }

    /// The animation used for deletions, the override if one is set
    pub fn delete_animation(&self) -> Animation {
        self.delete_animation.unwrap_or(self.default_animation)
    }

    /// Override the animation for deleted items, `None` falls back to the default
    pub fn set_delete_animation(&mut self, animation: Option<Animation>) {
        self.delete_animation = animation;
    }

    /// The animation used for insertions, the override if one is set
    pub fn insert_animation(&self) -> Animation {
        self.insert_animation.unwrap_or(self.default_animation)
    }

    /// Override the animation for inserted items, `None` falls back to the default
    pub fn set_insert_animation(&mut self, animation: Option<Animation>) {
        self.insert_animation = animation;
    }
}

/// Applies `diff` to `section` of `target` as a single batch.
///
/// Deletions are issued first, then insertions, then one move per entry of
/// [`ElementDiff::moved`] in ascending order of origin. Unmoved items need no call.
///
/// `target` must show exactly the sequence the diff was computed from as `original`. Only the item
/// count can be checked, a mismatch returns [`Error::CountMismatch`] before any call is issued.
///
/// E.g.
/// ```ignore
/// let previous = std::mem::replace(&mut self.items, model.rows());
/// let diff = diff_by(&previous, &self.items, |row| row.id);
///
/// update_section(&mut self.table, 0, &diff, &UpdateConfig::default())?;
/// ```
pub fn update_section<U: ItemUpdates + ?Sized>(
    target: &mut U,
    section: usize,
    diff: &ElementDiff,
    config: &UpdateConfig,
) -> Result<(), Error> {
    let count = target.item_count(section);
    if count != diff.original_len() {
        tracing::warn!(
            section,
            expected = diff.original_len(),
            actual = count,
            "section out of sync with diff"
        );
        return Err(Error::CountMismatch {
            expected: diff.original_len(),
            actual: count,
        });
    }

    tracing::debug!(section, %diff, "updating section");

    target.begin_updates();

    if !diff.deleted().is_empty() {
        target.delete_items(section, diff.deleted(), config.delete_animation());
    }

    if !diff.inserted().is_empty() {
        target.insert_items(section, diff.inserted(), config.insert_animation());
    }

    for (&from, &to) in diff.moved().iter() {
        target.move_item(section, from, to);
    }

    target.end_updates();

    Ok(())
}
