use palette::Srgb;

use crate::data::model::{Category, Collection, Region};
use crate::style::StyleTable;

use super::{PlotError, Y_MAX};

// ---------------------------------------------------------------------------
// Draw plan – everything the backend needs, with style already resolved
// ---------------------------------------------------------------------------

/// How a curve's fill is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// The curve's own points closed into a filled polygon.
    Closed,
    /// Filled between the curve and the top of the y-domain.
    Band,
}

/// One curve ready to draw: outline points, fill boundary, resolved style.
#[derive(Debug, Clone)]
pub struct Shape {
    pub category: Category,
    pub region: Region,
    pub kind: ShapeKind,
    /// The curve itself, drawn as a thin line in the outline color.
    pub outline: Vec<(f64, f64)>,
    /// Polygon boundary for the fill. For [`ShapeKind::Band`] this is the
    /// curve plus the two top corners of the y-domain.
    pub fill_boundary: Vec<(f64, f64)>,
    pub outline_color: Srgb<u8>,
    pub fill_color: Srgb<u8>,
    pub fill_alpha: f64,
}

/// One manually specified legend patch, one per category.
#[derive(Debug, Clone)]
pub struct LegendEntry {
    pub category: Category,
    /// Two caption lines: search description and journal reference.
    pub caption: [&'static str; 2],
    pub fill_color: Srgb<u8>,
    pub outline_color: Srgb<u8>,
}

#[derive(Debug, Clone)]
pub struct DrawPlan {
    pub shapes: Vec<Shape>,
    pub legend: Vec<LegendEntry>,
}

// ---------------------------------------------------------------------------
// Plan construction
// ---------------------------------------------------------------------------

/// Resolve data and style into a [`DrawPlan`]: exactly one shape per
/// (category, region) curve and one legend entry per category. Any
/// missing style entry fails here, before a backend exists.
pub fn build_plan(data: &Collection, style: &StyleTable) -> Result<DrawPlan, PlotError> {
    let mut shapes = Vec::with_capacity(data.len());

    for (category, region, dataset) in data.iter() {
        let outline_color = style
            .outline(category, region)
            .ok_or(PlotError::MissingStyleEntry { category, region })?;
        let fill_color = style
            .fill(category, region)
            .ok_or(PlotError::MissingStyleEntry { category, region })?;
        let fill_alpha = style
            .alpha(category)
            .ok_or(PlotError::MissingStyleEntry { category, region })?;

        let outline: Vec<(f64, f64)> = dataset.points().iter().map(|p| (p.x, p.y)).collect();

        let (kind, fill_boundary) = if category.is_band() {
            // Close the band along the top edge of the y-domain.
            let mut boundary = outline.clone();
            if let (Some(&(last_x, _)), Some(&(first_x, _))) = (outline.last(), outline.first()) {
                boundary.push((last_x, Y_MAX));
                boundary.push((first_x, Y_MAX));
            }
            (ShapeKind::Band, boundary)
        } else {
            (ShapeKind::Closed, outline.clone())
        };

        shapes.push(Shape {
            category,
            region,
            kind,
            outline,
            fill_boundary,
            outline_color,
            fill_color,
            fill_alpha,
        });
    }

    let legend = legend_entries(style)?;

    Ok(DrawPlan { shapes, legend })
}

/// The three fixed legend entries, in the source plot's order. The patch
/// uses region 1's colors of each category.
fn legend_entries(style: &StyleTable) -> Result<Vec<LegendEntry>, PlotError> {
    Category::ALL
        .iter()
        .map(|&category| {
            let region = Region::literal(1);
            let fill_color = style
                .fill(category, region)
                .ok_or(PlotError::MissingStyleEntry { category, region })?;
            let outline_color = style
                .outline(category, region)
                .ok_or(PlotError::MissingStyleEntry { category, region })?;
            Ok(LegendEntry {
                category,
                caption: caption(category),
                fill_color,
                outline_color,
            })
        })
        .collect()
}

fn caption(category: Category) -> [&'static str; 2] {
    match category {
        Category::Hahm => ["HAHM, 2µ, 97.6 fb⁻¹", "JHEP 05 (2023) 228"],
        Category::DarkSusy => ["Dark SUSY, 4µ, 35.9 fb⁻¹", "PLB 796 (2019) 131"],
        Category::HahmScouting => ["HAHM, 2µ (scouting), 101 fb⁻¹", "JHEP 04 (2022) 062"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Dataset;

    fn full_collection() -> Collection {
        let mut coll = Collection::new();
        for n in 1..=5 {
            coll.insert(
                Category::HahmScouting,
                Region::new(n).unwrap(),
                Dataset::from_iter([(1.0, 1e-5), (2.0, 1e-6), (1.5, 1e-7)]),
            );
        }
        coll.insert(
            Category::DarkSusy,
            Region::literal(1),
            Dataset::from_iter([(0.5, 1e-4), (10.0, 1e-5)]),
        );
        coll.insert(
            Category::Hahm,
            Region::literal(1),
            Dataset::from_iter([(1.0, 1e-6), (3.0, 1e-7), (2.0, 1e-8)]),
        );
        coll
    }

    #[test]
    fn one_shape_per_curve_three_legend_entries() {
        let plan = build_plan(&full_collection(), &StyleTable::default()).unwrap();
        assert_eq!(plan.shapes.len(), 7);
        assert_eq!(plan.legend.len(), 3);
    }

    #[test]
    fn only_dark_susy_is_a_band() {
        let plan = build_plan(&full_collection(), &StyleTable::default()).unwrap();
        for shape in &plan.shapes {
            let expected = if shape.category == Category::DarkSusy {
                ShapeKind::Band
            } else {
                ShapeKind::Closed
            };
            assert_eq!(shape.kind, expected);
        }
    }

    #[test]
    fn band_boundary_is_closed_along_the_top() {
        let plan = build_plan(&full_collection(), &StyleTable::default()).unwrap();
        let band = plan
            .shapes
            .iter()
            .find(|s| s.kind == ShapeKind::Band)
            .unwrap();

        assert_eq!(band.fill_boundary.len(), band.outline.len() + 2);
        let n = band.fill_boundary.len();
        assert_eq!(band.fill_boundary[n - 2], (10.0, Y_MAX));
        assert_eq!(band.fill_boundary[n - 1], (0.5, Y_MAX));
    }

    #[test]
    fn missing_style_entry_fails() {
        let complete = StyleTable::default();
        // Rebuild the table without the Hahm fill entry.
        let mut partial = StyleTable::empty();
        for (category, region, _) in crate::data::MANIFEST {
            partial.set_outline(category, region, complete.outline(category, region).unwrap());
            if category != Category::Hahm {
                partial.set_fill(category, region, complete.fill(category, region).unwrap());
            }
            partial.set_alpha(category, complete.alpha(category).unwrap());
        }

        let err = build_plan(&full_collection(), &partial).unwrap_err();
        match err {
            PlotError::MissingStyleEntry { category, .. } => {
                assert_eq!(category, Category::Hahm);
            }
            other => panic!("expected MissingStyleEntry, got {other:?}"),
        }
    }

    #[test]
    fn legend_follows_source_plot_order() {
        let plan = build_plan(&full_collection(), &StyleTable::default()).unwrap();
        let order: Vec<Category> = plan.legend.iter().map(|e| e.category).collect();
        assert_eq!(
            order,
            vec![Category::Hahm, Category::DarkSusy, Category::HahmScouting]
        );
    }
}
