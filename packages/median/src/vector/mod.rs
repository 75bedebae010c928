//! Dense vector operations on `f32` slices

/// 向量点积
pub fn dot_product(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(&x, &y)| x * y).sum()
}

/// 欧几里得范数
pub fn norm(a: &[f32]) -> f32 {
    dot_product(a, a).sqrt()
}

/// 余弦相似度，任一向量范数为零时返回 0
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    cosine_with_norms(a, norm(a), b, norm(b))
}

/// 使用预先计算的范数求余弦相似度
pub fn cosine_with_norms(a: &[f32], norm_a: f32, b: &[f32], norm_b: f32) -> f32 {
    if norm_a > 0.0 && norm_b > 0.0 {
        dot_product(a, b) / (norm_a * norm_b)
    } else {
        0.0
    }
}

/// 向量减法: a - b
pub fn sub(a: &[f32], b: &[f32]) -> Vec<f32> {
    a.iter().zip(b.iter()).map(|(&x, &y)| x - y).collect()
}

/// 向量加法: a += scale * b
pub fn vec_add_scaled(a: &mut [f32], b: &[f32], scale: f32) {
    for (ai, &bi) in a.iter_mut().zip(b.iter()) {
        *ai += scale * bi;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_dot_product() {
        let a = vec![1.0, 2.0, 3.0];
        let b = vec![4.0, 5.0, 6.0];
        assert!((dot_product(&a, &b) - 32.0).abs() < EPSILON);
    }

    #[test]
    fn test_norm() {
        assert!((norm(&[3.0, 4.0]) - 5.0).abs() < EPSILON);
        assert_eq!(norm(&[0.0, 0.0]), 0.0);
    }

    #[test]
    fn test_cosine_parallel_and_opposite() {
        let a = vec![1.0, 2.0];
        let b = vec![2.0, 4.0];
        let c = vec![-1.0, -2.0];
        assert!((cosine_similarity(&a, &b) - 1.0).abs() < EPSILON);
        assert!((cosine_similarity(&a, &c) + 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_cosine_orthogonal() {
        assert!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).abs() < EPSILON);
    }

    #[test]
    fn test_cosine_zero_vector_returns_zero() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
    }

    #[test]
    fn test_sub_and_add_scaled() {
        let mut d = sub(&[3.0, 5.0], &[1.0, 1.0]);
        assert_eq!(d, vec![2.0, 4.0]);
        vec_add_scaled(&mut d, &[1.0, 1.0], -2.0);
        assert_eq!(d, vec![0.0, 2.0]);
    }
}
