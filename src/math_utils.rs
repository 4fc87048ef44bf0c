/// Mathematical utilities for curve evaluation and arc approximation
use euclid::default::{Point2D, Vector2D};

/// Type alias for cubic Bezier segment: (start_point, control_point_1, control_point_2, end_point)
pub type CubicBezierSegment<T> = (Point2D<T>, Point2D<T>, Point2D<T>, Point2D<T>);

/// Evaluate a cubic Bezier at parameter `t` in [0, 1]
pub fn cubic_point<T>(seg: CubicBezierSegment<T>, t: T) -> Point2D<T>
where
    T: num_traits::Float,
{
    let (p0, p1, p2, p3) = seg;
    let three = T::one() + T::one() + T::one();
    let u = T::one() - t;
    let u2 = u * u;
    let t2 = t * t;
    let w0 = u2 * u;
    let w1 = three * u2 * t;
    let w2 = three * u * t2;
    let w3 = t2 * t;
    Point2D::new(
        w0 * p0.x + w1 * p1.x + w2 * p2.x + w3 * p3.x,
        w0 * p0.y + w1 * p1.y + w2 * p2.y + w3 * p3.y,
    )
}

/// Point on a circle of `radius` around `center` at `angle` radians.
/// Angles grow toward +y, so in a y-down space a positive sweep turns clockwise on screen.
pub fn arc_point<T>(center: Point2D<T>, radius: T, angle: T) -> Point2D<T>
where
    T: num_traits::Float,
{
    Point2D::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
}

/// Approximate a circular arc with cubic Bezier segments of at most a quarter turn each.
///
/// # Arguments
/// * `center` - Circle center
/// * `radius` - Circle radius
/// * `start` - Start angle in radians
/// * `sweep` - Signed sweep in radians
pub fn arc_to_cubics<T>(center: Point2D<T>, radius: T, start: T, sweep: T) -> Vec<CubicBezierSegment<T>>
where
    T: num_traits::Float + num_traits::FloatConst,
{
    if sweep == T::zero() || radius <= T::zero() {
        return vec![];
    }

    let quarter = T::FRAC_PI_2();
    let count = (sweep.abs() / quarter).ceil().max(T::one());
    let steps = count.to_usize().unwrap_or(1);
    let step = sweep / count;
    // Standard tangent-length constant for a circular arc of `step` radians
    let two = T::one() + T::one();
    let four = two + two;
    let k = four / (two + T::one()) * (step / four).tan();

    let mut segs = Vec::with_capacity(steps);
    let mut angle = start;
    for _ in 0..steps {
        let next = angle + step;
        let p0 = arc_point(center, radius, angle);
        let p3 = arc_point(center, radius, next);
        let t0 = Vector2D::new(-angle.sin(), angle.cos()) * (radius * k);
        let t1 = Vector2D::new(-next.sin(), next.cos()) * (radius * k);
        segs.push((p0, p0 + t0, p3 - t1, p3));
        angle = next;
    }
    segs
}

/// Calculate distance between two points
pub fn distance<T>(p1: Point2D<T>, p2: Point2D<T>) -> T
where
    T: num_traits::Float,
{
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    (dx * dx + dy * dy).sqrt()
}

/// Clamp a float into [lo, hi], mapping NaN to `lo`
pub fn clamp_or<T>(value: T, lo: T, hi: T) -> T
where
    T: num_traits::Float,
{
    if value.is_nan() {
        lo
    } else {
        value.max(lo).min(hi)
    }
}
