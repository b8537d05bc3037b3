use outline_core::error::{OutlineError, Result};
use outline_core::traits::{BoundingBox, Validate};
use outline_core::Tolerance;
use outline_math::{Aabb, Point};
use serde::{Deserialize, Serialize};

use crate::winding::{winding_sum, Winding};

/// A loop of indices into a pool's coordinates. Order is significant.
pub type Face = Vec<usize>;

/// Faces sharing one coordinate array.
///
/// The pool owns every point; faces only refer to them by index, so a vertex
/// shared by several faces is stored once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshFacePool<P> {
    pub coords: Vec<P>,
    pub faces: Vec<Face>,
}

impl<P: Point> MeshFacePool<P> {
    pub fn new(coords: Vec<P>, faces: Vec<Face>) -> Self {
        Self { coords, faces }
    }

    /// Number of shared coordinates.
    pub fn coord_count(&self) -> usize {
        self.coords.len()
    }

    /// Number of faces.
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Append a coordinate, returning its index.
    pub fn push_coord(&mut self, p: P) -> usize {
        self.coords.push(p);
        self.coords.len() - 1
    }

    /// Append a face, returning its index. The face is not checked.
    pub fn push_face(&mut self, face: Face) -> usize {
        self.faces.push(face);
        self.faces.len() - 1
    }

    /// Merge another pool into this one, offsetting its indices.
    pub fn merge(&mut self, other: &MeshFacePool<P>) {
        let offset = self.coords.len();
        self.coords.extend_from_slice(&other.coords);
        self.faces.extend(
            other
                .faces
                .iter()
                .map(|face| face.iter().map(|&i| i + offset).collect::<Face>()),
        );
    }

    /// Why face `index` cannot be analysed, if it cannot.
    pub fn check_face(&self, index: usize) -> std::result::Result<(), String> {
        let face = self
            .faces
            .get(index)
            .ok_or_else(|| format!("no face at index {}", index))?;
        self.check_loop(face)
    }

    /// Why an index loop cannot be resolved against this pool, if it cannot.
    pub fn check_loop(&self, face: &[usize]) -> std::result::Result<(), String> {
        if face.len() < 3 {
            return Err(format!("{} vertices, need at least 3", face.len()));
        }
        if let Some(&bad) = face.iter().find(|&&i| i >= self.coords.len()) {
            return Err(format!(
                "coordinate index {} out of range for {} coordinates",
                bad,
                self.coords.len()
            ));
        }
        Ok(())
    }

    /// Coordinates of face `index` in loop order, if the face is well formed.
    pub fn face_points(&self, index: usize) -> Option<impl Iterator<Item = P> + '_> {
        self.check_face(index).ok()?;
        Some(self.faces[index].iter().map(move |&i| self.coords[i]))
    }

    pub fn face_bounds(&self, index: usize) -> Option<Aabb<P>> {
        Aabb::from_points(self.face_points(index)?)
    }

    /// Signed edge sum of face `index`; negative for counter-clockwise.
    pub fn winding(&self, index: usize) -> Option<f64> {
        self.check_face(index).ok()?;
        Some(winding_sum(&self.coords, &self.faces[index]))
    }

    /// Orientation of face `index` with a scale-relative degenerate cutoff.
    pub fn classify(&self, index: usize, tolerance: Tolerance) -> Option<Winding> {
        let sum = self.winding(index)?;
        let extent = self.face_bounds(index)?.max_extent();
        Some(Winding::classify(sum, extent, tolerance))
    }

    pub fn is_ccw(&self, index: usize) -> bool {
        self.classify(index, Tolerance::default()) == Some(Winding::CounterClockwise)
    }

    pub fn is_cw(&self, index: usize) -> bool {
        self.classify(index, Tolerance::default()) == Some(Winding::Clockwise)
    }
}

impl<P> Default for MeshFacePool<P> {
    fn default() -> Self {
        Self {
            coords: Vec::new(),
            faces: Vec::new(),
        }
    }
}

impl<P: Point> Validate for MeshFacePool<P> {
    fn validate(&self) -> Result<()> {
        if let Some(i) = self.coords.iter().position(|p| !p.all_finite()) {
            return Err(OutlineError::NonFinite(format!("coordinate {}", i)));
        }
        for face in 0..self.faces.len() {
            self.check_face(face)
                .map_err(|reason| OutlineError::InvalidFace { face, reason })?;
        }
        Ok(())
    }
}

impl<P: Point> BoundingBox for MeshFacePool<P> {
    type Point = P;

    fn bounding_box(&self) -> Option<(P, P)> {
        let bb = Aabb::from_points(self.coords.iter().copied())?;
        Some((bb.min, bb.max))
    }
}
