use log::debug;

use super::model::{Collection, Dataset, Point};

// ---------------------------------------------------------------------------
// Unit conversion: log10(ε²) → ε
// ---------------------------------------------------------------------------

/// Rescale the loaded curves for plotting.
///
/// The Dark SUSY source file stores the second column as log10(ε²); the
/// chart plots ε itself, so each y becomes `sqrt(10^y)`. The mass column
/// is never touched and every other category passes through with
/// identical values. NaN or out-of-range inputs propagate unflagged.
pub fn scale_collection(data: &Collection) -> Collection {
    let mut scaled = Collection::new();

    for (category, region, dataset) in data.iter() {
        let dataset = if category.is_log_eps_squared() {
            debug!("rescaling {category} region {region} from log10(ε²) to ε");
            Dataset::new(
                dataset
                    .points()
                    .iter()
                    .map(|p| Point {
                        x: p.x,
                        y: 10f64.powf(p.y).sqrt(),
                    })
                    .collect(),
            )
        } else {
            dataset.clone()
        };
        scaled.insert(category, region, dataset);
    }

    scaled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Category, Region};

    fn collection_with(category: Category, points: &[(f64, f64)]) -> Collection {
        let mut coll = Collection::new();
        coll.insert(
            category,
            Region::literal(1),
            points.iter().copied().collect(),
        );
        coll
    }

    #[test]
    fn dark_susy_y_becomes_sqrt_ten_to_the_y() {
        let coll = collection_with(Category::DarkSusy, &[(1.0, -3.0), (2.0, -6.0)]);
        let scaled = scale_collection(&coll);

        let ds = scaled.get(Category::DarkSusy, Region::literal(1)).unwrap();
        assert!((ds.points()[0].y - 0.0316227766).abs() < 1e-9);
        assert!((ds.points()[1].y - 1e-3).abs() < 1e-12);
    }

    #[test]
    fn mass_column_is_untouched() {
        let coll = collection_with(Category::DarkSusy, &[(0.5, -4.0), (30.0, -8.0)]);
        let scaled = scale_collection(&coll);

        let ds = scaled.get(Category::DarkSusy, Region::literal(1)).unwrap();
        assert_eq!(ds.points()[0].x, 0.5);
        assert_eq!(ds.points()[1].x, 30.0);
    }

    #[test]
    fn other_categories_pass_through_value_identical() {
        for category in [Category::HahmScouting, Category::Hahm] {
            let coll = collection_with(category, &[(1.0, -3.0), (5.0, 1e-6)]);
            let scaled = scale_collection(&coll);

            let before = coll.get(category, Region::literal(1)).unwrap();
            let after = scaled.get(category, Region::literal(1)).unwrap();
            assert_eq!(before, after);
        }
    }

    #[test]
    fn nan_propagates() {
        let coll = collection_with(Category::DarkSusy, &[(1.0, f64::NAN)]);
        let scaled = scale_collection(&coll);

        let ds = scaled.get(Category::DarkSusy, Region::literal(1)).unwrap();
        assert!(ds.points()[0].y.is_nan());
    }
}
