//! Achsenparallele Bounding-Box für Selektions- und Geometrieabfragen.

use glam::Vec3;

/// Achsenparallele Box, `min <= max` komponentenweise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BBox {
    /// Minimale Ecke
    pub min: Vec3,
    /// Maximale Ecke
    pub max: Vec3,
}

impl BBox {
    /// Erstellt eine Box aus zwei Ecken (Reihenfolge egal).
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Würfel mit halber Kantenlänge `half_extent` um `center`.
    pub fn around(center: Vec3, half_extent: f32) -> Self {
        let half = Vec3::splat(half_extent.abs());
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Kleinste Box, die alle Punkte enthält. `None` bei leerer Eingabe.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vec3>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::new(first, first), |bbox, p| Self {
            min: bbox.min.min(p),
            max: bbox.max.max(p),
        }))
    }

    /// Vereinigung zweier Boxen.
    pub fn merge(&self, other: &BBox) -> BBox {
        BBox {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Vereinigt eine Folge von Boxen. `None` bei leerer Eingabe.
    pub fn merge_all<I>(boxes: I) -> Option<BBox>
    where
        I: IntoIterator<Item = BBox>,
    {
        boxes.into_iter().reduce(|acc, bbox| acc.merge(&bbox))
    }

    /// Mittelpunkt der Box.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_points_umschliesst_alle_punkte() {
        let bbox = BBox::from_points([
            Vec3::new(1.0, -2.0, 3.0),
            Vec3::new(-4.0, 5.0, 0.0),
            Vec3::new(2.0, 1.0, -6.0),
        ])
        .expect("Box erwartet");

        assert_eq!(bbox.min, Vec3::new(-4.0, -2.0, -6.0));
        assert_eq!(bbox.max, Vec3::new(2.0, 5.0, 3.0));
    }

    #[test]
    fn test_from_points_leer_liefert_none() {
        assert!(BBox::from_points(std::iter::empty()).is_none());
    }

    #[test]
    fn test_merge_und_center() {
        let a = BBox::new(Vec3::ZERO, Vec3::splat(2.0));
        let b = BBox::new(Vec3::splat(4.0), Vec3::splat(6.0));
        let merged = a.merge(&b);

        assert_eq!(merged.min, Vec3::ZERO);
        assert_eq!(merged.max, Vec3::splat(6.0));
        let c = merged.center();
        assert_relative_eq!(c.x, 3.0);
        assert_relative_eq!(c.y, 3.0);
        assert_relative_eq!(c.z, 3.0);
    }

    #[test]
    fn test_around_mit_negativer_halbkante() {
        let bbox = BBox::around(Vec3::ONE, -8.0);
        assert_eq!(bbox.min, Vec3::splat(-7.0));
        assert_eq!(bbox.max, Vec3::splat(9.0));
    }
}
