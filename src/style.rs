use std::collections::BTreeMap;

use palette::Srgb;

use crate::data::model::{Category, Region};
use crate::data::MANIFEST;

// ---------------------------------------------------------------------------
// Named colors (xkcd survey values used by the source plot)
// ---------------------------------------------------------------------------

const AQUA_BLUE: Srgb<u8> = Srgb::new(0x02, 0xd8, 0xe9);
const PALE_ORANGE: Srgb<u8> = Srgb::new(0xff, 0xa7, 0x56);
const ORANGE: Srgb<u8> = Srgb::new(0xf9, 0x73, 0x06);
const XKCD_RED: Srgb<u8> = Srgb::new(0xe5, 0x00, 0x00);
const RED: Srgb<u8> = Srgb::new(0xff, 0x00, 0x00);

// ---------------------------------------------------------------------------
// Style table: (category, region) → colors, category → opacity
// ---------------------------------------------------------------------------

/// Presentation constants for the chart, passed explicitly into the
/// renderer. Built once, never mutated afterwards.
///
/// Colors are keyed per (category, region) so individual regions can be
/// styled apart; the default table gives every manifest entry its
/// category's colors.
#[derive(Debug, Clone)]
pub struct StyleTable {
    outline: BTreeMap<(Category, Region), Srgb<u8>>,
    fill: BTreeMap<(Category, Region), Srgb<u8>>,
    alpha: BTreeMap<Category, f64>,
}

impl StyleTable {
    /// An empty table; every lookup fails until entries are set.
    pub fn empty() -> Self {
        StyleTable {
            outline: BTreeMap::new(),
            fill: BTreeMap::new(),
            alpha: BTreeMap::new(),
        }
    }

    pub fn set_outline(&mut self, category: Category, region: Region, color: Srgb<u8>) {
        self.outline.insert((category, region), color);
    }

    pub fn set_fill(&mut self, category: Category, region: Region, color: Srgb<u8>) {
        self.fill.insert((category, region), color);
    }

    pub fn set_alpha(&mut self, category: Category, alpha: f64) {
        self.alpha.insert(category, alpha);
    }

    pub fn outline(&self, category: Category, region: Region) -> Option<Srgb<u8>> {
        self.outline.get(&(category, region)).copied()
    }

    pub fn fill(&self, category: Category, region: Region) -> Option<Srgb<u8>> {
        self.fill.get(&(category, region)).copied()
    }

    pub fn alpha(&self, category: Category) -> Option<f64> {
        self.alpha.get(&category).copied()
    }
}

impl Default for StyleTable {
    fn default() -> Self {
        let mut table = StyleTable::empty();

        for (category, region, _) in MANIFEST {
            let (outline, fill) = match category {
                Category::HahmScouting => (AQUA_BLUE, AQUA_BLUE),
                Category::DarkSusy => (ORANGE, PALE_ORANGE),
                Category::Hahm => (XKCD_RED, RED),
            };
            table.set_outline(category, region, outline);
            table.set_fill(category, region, fill);
        }

        table.set_alpha(Category::HahmScouting, 0.3);
        table.set_alpha(Category::DarkSusy, 0.4);
        table.set_alpha(Category::Hahm, 0.25);

        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_covers_every_manifest_entry() {
        let table = StyleTable::default();
        for (category, region, _) in MANIFEST {
            assert!(table.outline(category, region).is_some());
            assert!(table.fill(category, region).is_some());
            assert!(table.alpha(category).is_some());
        }
    }

    #[test]
    fn empty_table_has_no_entries() {
        let table = StyleTable::empty();
        assert!(table.outline(Category::Hahm, Region::literal(1)).is_none());
        assert!(table.alpha(Category::Hahm).is_none());
    }

    #[test]
    fn dark_susy_outline_differs_from_fill() {
        let table = StyleTable::default();
        let region = Region::literal(1);
        assert_ne!(
            table.outline(Category::DarkSusy, region),
            table.fill(Category::DarkSusy, region)
        );
    }
}
