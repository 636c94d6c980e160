//! One fixed record per named sprite: a handle plus a ready flag that flips
//! once, when the image finishes loading.

use crate::config::AssetPaths;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AssetId {
    Background,
    Hero,
    Monster,
}

impl AssetId {
    pub const ALL: [AssetId; 3] = [AssetId::Background, AssetId::Hero, AssetId::Monster];

    pub fn path(self, paths: &AssetPaths) -> &str {
        match self {
            AssetId::Background => &paths.background,
            AssetId::Hero => &paths.hero,
            AssetId::Monster => &paths.monster,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Asset<H> {
    pub loaded: bool,
    pub handle: H,
}

impl<H> Asset<H> {
    pub fn pending(handle: H) -> Self {
        Self {
            loaded: false,
            handle,
        }
    }

    /// The handle, only once it is safe to draw.
    pub fn ready(&self) -> Option<&H> {
        self.loaded.then_some(&self.handle)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AssetSet<H> {
    pub background: Asset<H>,
    pub hero: Asset<H>,
    pub monster: Asset<H>,
}

impl<H> AssetSet<H> {
    /// Builds every handle up front; none is ready yet.
    pub fn build<E>(mut make: impl FnMut(AssetId) -> Result<H, E>) -> Result<Self, E> {
        Ok(Self {
            background: Asset::pending(make(AssetId::Background)?),
            hero: Asset::pending(make(AssetId::Hero)?),
            monster: Asset::pending(make(AssetId::Monster)?),
        })
    }

    pub fn get(&self, id: AssetId) -> &Asset<H> {
        match id {
            AssetId::Background => &self.background,
            AssetId::Hero => &self.hero,
            AssetId::Monster => &self.monster,
        }
    }

    /// Returns false when the asset was already marked.
    pub fn mark_loaded(&mut self, id: AssetId) -> bool {
        let asset = match id {
            AssetId::Background => &mut self.background,
            AssetId::Hero => &mut self.hero,
            AssetId::Monster => &mut self.monster,
        };
        !std::mem::replace(&mut asset.loaded, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> AssetSet<&'static str> {
        AssetSet::build::<()>(|id| {
            Ok(match id {
                AssetId::Background => "bg",
                AssetId::Hero => "hero",
                AssetId::Monster => "monster",
            })
        })
        .unwrap()
    }

    #[test]
    fn nothing_is_ready_after_build() {
        let set = names();
        for id in AssetId::ALL {
            assert!(set.get(id).ready().is_none());
        }
    }

    #[test]
    fn mark_loaded_flips_only_that_asset_once() {
        let mut set = names();
        assert!(set.mark_loaded(AssetId::Hero));
        assert!(!set.mark_loaded(AssetId::Hero));
        assert_eq!(set.hero.ready(), Some(&"hero"));
        assert!(set.background.ready().is_none());
        assert!(set.monster.ready().is_none());
    }

    #[test]
    fn build_stops_at_first_failure() {
        let mut seen = Vec::new();
        let result = AssetSet::build(|id| {
            seen.push(id);
            if id == AssetId::Hero { Err("decode") } else { Ok(()) }
        });
        assert_eq!(result, Err("decode"));
        assert_eq!(seen, vec![AssetId::Background, AssetId::Hero]);
    }

    #[test]
    fn paths_come_from_config() {
        let paths = AssetPaths::default();
        assert_eq!(AssetId::Background.path(&paths), "images/background.png");
        assert_eq!(AssetId::Hero.path(&paths), "images/hero.png");
        assert_eq!(AssetId::Monster.path(&paths), "images/monster.png");
    }
}
