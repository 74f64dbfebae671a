use num_traits::{One, PrimInt};

/// Trait implemented by flag enums stored in a [`BitmaskFlags`] container.
///
/// The enum's discriminant (via `#[repr(u8)]`) determines the bit index.
/// The backing integer type is chosen via the associated `Storage`.
pub trait FlagBitmask {
    type Storage: PrimInt;

    fn bit_index(&self) -> u8;

    fn mask(&self) -> Self::Storage {
        // Equivalent to: 1 << index
        // NOTE: `bit_index()` must be < number of bits in `Storage`.
        Self::Storage::one() << (self.bit_index() as usize)
    }
}

/// A small, copyable flag set backed by a primitive integer.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
pub struct BitmaskFlags<T: PrimInt> {
    pub bits: T,
}

impl<T: PrimInt> BitmaskFlags<T> {
    pub fn new(bits: T) -> Self {
        Self { bits }
    }

    pub fn add<U: FlagBitmask<Storage = T>>(&mut self, flag: U) {
        self.bits = self.bits | flag.mask();
    }

    pub fn remove<U: FlagBitmask<Storage = T>>(&mut self, flag: U) {
        self.bits = self.bits & !flag.mask();
    }

    pub fn has<U: FlagBitmask<Storage = T>>(&self, flag: U) -> bool {
        (self.bits & flag.mask()) != T::zero()
    }

    /// Builder-style variant of [`add`](Self::add) for construction sites.
    pub fn with<U: FlagBitmask<Storage = T>>(mut self, flag: U) -> Self {
        self.add(flag);
        self
    }

    pub fn clear(&mut self) {
        self.bits = T::zero();
    }
}

/// Construction flags for obstacles.
///
/// - `Solid`: blocks from every direction. Absent, the obstacle is a
///   one-way platform (blocks only against the mode's gravity).
/// - `MirrorX`: mirror a height-map profile horizontally.
/// - `MirrorY`: anchor height-map columns to the top edge instead of the
///   bottom (ceiling slopes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ObstacleFlag {
    Solid,
    MirrorX,
    MirrorY,
}

impl FlagBitmask for ObstacleFlag {
    type Storage = u8;

    fn bit_index(&self) -> u8 {
        *self as u8
    }
}

/// Flag set attached to every obstacle at construction time.
pub type ObstacleFlags = BitmaskFlags<u8>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_start_empty() {
        let flags = ObstacleFlags::default();
        assert!(!flags.has(ObstacleFlag::Solid));
        assert!(!flags.has(ObstacleFlag::MirrorX));
        assert!(!flags.has(ObstacleFlag::MirrorY));
    }

    #[test]
    fn add_and_remove_are_independent_per_flag() {
        let mut flags = ObstacleFlags::default();
        flags.add(ObstacleFlag::Solid);
        flags.add(ObstacleFlag::MirrorY);

        assert!(flags.has(ObstacleFlag::Solid));
        assert!(!flags.has(ObstacleFlag::MirrorX));
        assert!(flags.has(ObstacleFlag::MirrorY));

        flags.remove(ObstacleFlag::Solid);
        assert!(!flags.has(ObstacleFlag::Solid));
        assert!(flags.has(ObstacleFlag::MirrorY));
    }

    #[test]
    fn with_builds_the_same_set_as_add() {
        let built = ObstacleFlags::default()
            .with(ObstacleFlag::Solid)
            .with(ObstacleFlag::MirrorX);

        let mut added = ObstacleFlags::default();
        added.add(ObstacleFlag::Solid);
        added.add(ObstacleFlag::MirrorX);

        assert_eq!(built, added);
    }

    #[test]
    fn clear_resets_all_bits() {
        let mut flags = ObstacleFlags::default().with(ObstacleFlag::Solid);
        flags.clear();
        assert_eq!(flags, ObstacleFlags::default());
    }
}
