//! Projection onto the anchor axis
//!
//! The axis runs from `start` to `end`. With `u = (end - start) / |end - start|`,
//! a point `v` maps to
//! - 1D: `along = (v - start) · u`
//! - 2D: `along` plus `across = |(v - start) - along * u|`, the off-axis
//!   displacement
//!
//! Used to place anchors, the best candidate and a guess on a common line.

use crate::error::{MedianError, Result};
use crate::provider::EmbeddingProvider;
use crate::types::AxisPosition;
use crate::vector::{dot_product, norm, sub, vec_add_scaled};

/// Unit direction of the axis
fn unit_axis(start: &[f32], end: &[f32]) -> Result<Vec<f32>> {
    if start.len() != end.len() {
        return Err(MedianError::DimensionMismatch {
            expected: start.len(),
            actual: end.len(),
        });
    }

    let mut direction = sub(end, start);
    let length = norm(&direction);
    // 零长度或 NaN 无法归一化
    if length == 0.0 || !length.is_finite() {
        return Err(MedianError::DegenerateAxis);
    }
    for component in direction.iter_mut() {
        *component /= length;
    }
    Ok(direction)
}

fn check_dimension(point: &[f32], dimension: usize) -> Result<()> {
    if point.len() != dimension {
        return Err(MedianError::DimensionMismatch {
            expected: dimension,
            actual: point.len(),
        });
    }
    Ok(())
}

/// Scalar position of each point along the axis
pub fn project_1d<V: AsRef<[f32]>>(points: &[V], start: &[f32], end: &[f32]) -> Result<Vec<f32>> {
    let axis = unit_axis(start, end)?;
    points
        .iter()
        .map(|point| {
            let point = point.as_ref();
            check_dimension(point, axis.len())?;
            Ok(dot_product(&sub(point, start), &axis))
        })
        .collect()
}

/// Position along the axis plus off-axis distance for each point
pub fn project_2d<V: AsRef<[f32]>>(
    points: &[V],
    start: &[f32],
    end: &[f32],
) -> Result<Vec<AxisPosition>> {
    let axis = unit_axis(start, end)?;
    points
        .iter()
        .map(|point| {
            let point = point.as_ref();
            check_dimension(point, axis.len())?;
            let mut residual = sub(point, start);
            let along = dot_product(&residual, &axis);
            vec_add_scaled(&mut residual, &axis, -along);
            Ok(AxisPosition {
                along,
                across: norm(&residual),
            })
        })
        .collect()
}

/// 1D positions of `words` on the axis from `word1` to `word2`
pub fn project_words<P, S>(provider: &P, word1: &str, word2: &str, words: &[S]) -> Result<Vec<f32>>
where
    P: EmbeddingProvider + ?Sized,
    S: AsRef<str>,
{
    let start = provider.vector(word1)?;
    let end = provider.vector(word2)?;
    let points = words
        .iter()
        .map(|w| provider.vector(w.as_ref()))
        .collect::<Result<Vec<_>>>()?;
    project_1d(&points, start, end)
}
