/// Storage used for collision layer masks.
///
/// 32 bits so a mask converts losslessly to and from Rapier's collider `user_data`.
pub type LayerBits = u32;

/// Trait implemented by collision layer enums.
///
/// The enum's discriminant (via `#[repr(u8)]`) determines the bit index.
pub trait LayerFlag {
    fn bit_index(&self) -> u8;

    fn mask(&self) -> LayerBits {
        // NOTE: `bit_index()` must be < 32.
        1 << self.bit_index()
    }
}

/// Declare a layer enum and implement `LayerFlag` for it.
///
/// Example:
/// ```rust
/// locomotion::define_layers!(HudLayer, {
///     Reticle,
///     Tooltip,
/// });
/// ```
#[macro_export]
macro_rules! define_layers {
    ($name:ident, { $($variant:ident),* $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u8)]
        pub enum $name {
            $($variant),*
        }

        impl $crate::layers::LayerFlag for $name {
            fn bit_index(&self) -> u8 {
                *self as u8
            }
        }
    };
}

define_layers!(CollisionLayer, {
    Default,
    Ground,
    Player,
    Interactable,
});

/// Set of collision layers used for scene queries and collider membership.
///
/// The ground probe hits a collider only when the collider's layers intersect the
/// configured ground mask.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct LayerMask {
    pub bits: LayerBits,
}

impl LayerMask {
    pub const NONE: Self = Self { bits: 0 };
    pub const ALL: Self = Self {
        bits: LayerBits::MAX,
    };

    pub const fn from_bits(bits: LayerBits) -> Self {
        Self { bits }
    }

    /// Mask containing exactly the given layers.
    pub fn of<L: LayerFlag + Copy>(layers: &[L]) -> Self {
        let mut mask = Self::NONE;
        for &layer in layers {
            mask.add(layer);
        }
        mask
    }

    pub fn add<L: LayerFlag>(&mut self, layer: L) {
        self.bits |= layer.mask();
    }

    pub fn remove<L: LayerFlag>(&mut self, layer: L) {
        self.bits &= !layer.mask();
    }

    pub fn has<L: LayerFlag>(&self, layer: L) -> bool {
        (self.bits & layer.mask()) != 0
    }

    pub fn intersects(&self, other: LayerMask) -> bool {
        (self.bits & other.bits) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }
}

impl<L: LayerFlag> From<L> for LayerMask {
    fn from(layer: L) -> Self {
        Self { bits: layer.mask() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_masks_use_discriminant_bits() {
        assert_eq!(CollisionLayer::Default.mask(), 0b0001);
        assert_eq!(CollisionLayer::Ground.mask(), 0b0010);
        assert_eq!(CollisionLayer::Interactable.mask(), 0b1000);
    }

    #[test]
    fn add_remove_and_query() {
        let mut mask = LayerMask::NONE;
        assert!(mask.is_empty());

        mask.add(CollisionLayer::Ground);
        mask.add(CollisionLayer::Player);
        assert!(mask.has(CollisionLayer::Ground));
        assert!(mask.has(CollisionLayer::Player));
        assert!(!mask.has(CollisionLayer::Default));

        mask.remove(CollisionLayer::Player);
        assert_eq!(mask, LayerMask::from(CollisionLayer::Ground));
    }

    #[test]
    fn intersects_requires_a_shared_layer() {
        let ground = LayerMask::of(&[CollisionLayer::Ground]);
        let props = LayerMask::of(&[CollisionLayer::Default, CollisionLayer::Interactable]);

        assert!(!ground.intersects(props));
        assert!(ground.intersects(LayerMask::ALL));
        assert!(!LayerMask::NONE.intersects(LayerMask::ALL));
    }
}
