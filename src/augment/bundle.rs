//! Named, shareable modifier bundles.
//!
//! An `Augment` is the unit designers attach to equipment or creatures:
//! a name plus one `ModifierList`. Cloning an augment is *shallow by
//! contract* - the clone shares the original's list, so a bundle worn
//! by fifty equipped items stores its rules once. Mutation through any
//! clone is visible through all of them; callers that need isolation
//! use `deep_copy`.
//!
//! This type is the single persistence boundary for modifier rules:
//! `serialize` writes a format version, the name, and the full rule
//! list in one record.

use std::cell::RefCell;
use std::rc::Rc;

use crate::codec::{CodecError, ReadStream, WriteStream};
use crate::modifier::{
    AttackModifier, DamageModifier, DefenseModifier, ModifierList, ModifierMatches,
};

/// Version tag written ahead of every augment record.
pub const FORMAT_VERSION: u8 = 1;

/// A named bundle of damage modifier rules.
///
/// `Clone` shares the underlying list (see module docs). The engine is
/// single-threaded per simulation tick, so the shared list is plain
/// `Rc<RefCell<_>>` - this type is deliberately not `Send`.
///
/// ## Example
///
/// ```
/// use combat_augments::augment::Augment;
/// use combat_augments::modifier::{AttackModifier, DamageModifier, ModifierKind};
///
/// let original = Augment::new("vampirism");
/// let mut worn_copy = original.clone();
///
/// worn_copy.add_modifier(DamageModifier::new(
///     ModifierKind::Attack(AttackModifier::Lifesteal),
///     10,
///     0,
///     None,
/// ));
///
/// // Both views observe the same rule set.
/// assert_eq!(original.attack_modifiers(AttackModifier::Lifesteal).len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Augment {
    name: String,
    modifiers: Rc<RefCell<ModifierList>>,
}

impl Augment {
    /// Create an augment with a fresh, empty modifier list.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modifiers: Rc::new(RefCell::new(ModifierList::new())),
        }
    }

    /// The bundle's stable identifier. Uniqueness is the content
    /// loader's concern, not enforced here.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// An independent copy with its own modifier list.
    ///
    /// Unlike `clone`, mutations of the copy are not visible through
    /// `self` and vice versa.
    #[must_use]
    pub fn deep_copy(&self) -> Self {
        Self {
            name: self.name.clone(),
            modifiers: Rc::new(RefCell::new(self.modifiers.borrow().clone())),
        }
    }

    /// True when `self` and `other` share one modifier list.
    #[must_use]
    pub fn shares_modifiers_with(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.modifiers, &other.modifiers)
    }

    /// Append a rule to the shared list. Returns `false` for a
    /// stance-less rule (see `ModifierList::add_modifier`).
    pub fn add_modifier(&mut self, modifier: DamageModifier) -> bool {
        self.modifiers.borrow_mut().add_modifier(modifier)
    }

    /// Remove the first structurally-equal rule. Absent rules are a
    /// no-op.
    pub fn remove_modifier(&mut self, modifier: &DamageModifier) {
        self.modifiers.borrow_mut().remove_modifier(modifier);
    }

    /// Attack rules of the given sub-type, in insertion order.
    #[must_use]
    pub fn attack_modifiers(&self, sub_type: AttackModifier) -> ModifierMatches {
        self.modifiers.borrow().attack_modifiers(sub_type)
    }

    /// Defense rules of the given sub-type, in insertion order.
    #[must_use]
    pub fn defense_modifiers(&self, sub_type: DefenseModifier) -> ModifierMatches {
        self.modifiers.borrow().defense_modifiers(sub_type)
    }

    #[must_use]
    pub fn modifier_count(&self) -> usize {
        self.modifiers.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modifiers.borrow().is_empty()
    }

    /// Write the full bundle: version, name, rule count, rules.
    pub fn serialize(&self, stream: &mut WriteStream) {
        stream.write_u8(FORMAT_VERSION);
        stream.write_str(&self.name);

        let list = self.modifiers.borrow();
        stream.write_u16(list.len().min(usize::from(u16::MAX)) as u16);
        for modifier in list.iter() {
            modifier.serialize(stream);
        }
    }

    /// Read one bundle written by `serialize`.
    ///
    /// Fails with `CodecError::UnsupportedVersion` before touching any
    /// other field when the version byte does not match. Rules whose
    /// classification decoded to "none" are dropped on insertion, so a
    /// partially-corrupt record loads its intact rules and skips the
    /// rest.
    pub fn unserialize(stream: &mut ReadStream<'_>) -> Result<Self, CodecError> {
        let version = stream.read_u8()?;
        if version != FORMAT_VERSION {
            return Err(CodecError::UnsupportedVersion(version));
        }

        let name = stream.read_str()?;
        let count = stream.read_u16()?;

        let mut augment = Self::new(name);
        for _ in 0..count {
            let modifier = DamageModifier::unserialize(stream)?;
            augment.add_modifier(modifier);
        }
        Ok(augment)
    }
}

impl PartialEq for Augment {
    /// Structural comparison: same name and same rule sequences, not
    /// necessarily the same shared list instance.
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && *self.modifiers.borrow() == *other.modifiers.borrow()
    }
}
