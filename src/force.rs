use crate::bob::Bob;

/// Spring-plus-gravity force laws.
///
/// Both variants apply the same Hooke force of magnitude `k·(Ln − L0)`
/// directed along the pivot-to-bob line, plus constant downward
/// gravity, writing `ax`/`ay` from the current position only. They are
/// mathematically equivalent away from the pivot and differ in how
/// they resolve the direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpringLaw {
    /// Decompose the spring force through the angle reconstructed from
    /// the position. Division-free, so the bob sitting exactly on the
    /// pivot still evaluates to a finite acceleration.
    #[default]
    AngleDecomposed,
    /// Project the spring force along the position vector directly.
    /// Divides by the current length: NaN on the pivot itself unless
    /// `softening` is positive.
    Cartesian,
}

/// Borrowed state and parameters for one force evaluation.
pub struct ForceContext<'a> {
    pub bob: &'a mut Bob,
    pub l0: f64,
    pub k: f64,
    pub m: f64,
    pub g: f64,
    pub softening: f64,
}

impl SpringLaw {
    /// Recompute `ax`/`ay` from the bob's current position.
    pub fn update(&self, ctx: &mut ForceContext<'_>) {
        match self {
            SpringLaw::AngleDecomposed => update_angle_decomposed(ctx),
            SpringLaw::Cartesian => update_cartesian(ctx),
        }
    }
}

fn update_angle_decomposed(ctx: &mut ForceContext<'_>) {
    let theta = ctx.bob.angle();
    let stretch = ctx.bob.length() - ctx.l0;

    ctx.bob.ax = -ctx.k * stretch * theta.sin() / ctx.m;
    ctx.bob.ay = ctx.k * stretch * theta.cos() / ctx.m - ctx.g;
}

fn update_cartesian(ctx: &mut ForceContext<'_>) {
    let bob = &mut *ctx.bob;
    let stretch = bob.length() - ctx.l0;
    // softened direction only; the extension term stays exact
    let dr = (bob.x * bob.x + bob.y * bob.y + ctx.softening * ctx.softening).sqrt();

    bob.ax = -ctx.k * stretch * bob.x / dr / ctx.m;
    bob.ay = -ctx.k * stretch * bob.y / dr / ctx.m - ctx.g;
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use super::*;

    fn eval(law: SpringLaw, x: f64, y: f64, softening: f64) -> (f64, f64) {
        let mut bob = Bob {
            x,
            y,
            ..Bob::default()
        };
        let mut ctx = ForceContext {
            bob: &mut bob,
            l0: 1.0,
            k: 60.0,
            m: 2.0,
            g: 9.81,
            softening,
        };
        law.update(&mut ctx);
        (bob.ax, bob.ay)
    }

    #[test]
    fn laws_agree_away_from_pivot() {
        for &(x, y) in &[(0.5, -0.9), (-0.3, -1.4), (0.01, -0.2), (0.8, 0.4)] {
            let (ax_a, ay_a) = eval(SpringLaw::AngleDecomposed, x, y, 0.0);
            let (ax_c, ay_c) = eval(SpringLaw::Cartesian, x, y, 0.0);
            assert!(approx_eq!(f64, ax_a, ax_c, epsilon = 1e-10));
            assert!(approx_eq!(f64, ay_a, ay_c, epsilon = 1e-10));
        }
    }

    #[test]
    fn unstretched_spring_leaves_only_gravity() {
        let (ax, ay) = eval(SpringLaw::AngleDecomposed, 0.0, -1.0, 0.0);
        assert_eq!(ax, 0.0);
        assert!(approx_eq!(f64, ay, -9.81, epsilon = 1e-12));

        let (ax, ay) = eval(SpringLaw::Cartesian, 0.0, -1.0, 0.0);
        assert_eq!(ax, 0.0);
        assert!(approx_eq!(f64, ay, -9.81, epsilon = 1e-12));
    }

    #[test]
    fn stretched_spring_pulls_back_toward_pivot() {
        // Bob straight below at 1.5 m on a 1 m spring: net upward pull
        // minus gravity.
        let (ax, ay) = eval(SpringLaw::AngleDecomposed, 0.0, -1.5, 0.0);
        assert_eq!(ax, 0.0);
        assert!(approx_eq!(f64, ay, 60.0 * 0.5 / 2.0 - 9.81, epsilon = 1e-12));
    }

    #[test]
    fn cartesian_law_is_nan_on_the_pivot() {
        let (ax, ay) = eval(SpringLaw::Cartesian, 0.0, 0.0, 0.0);
        assert!(ax.is_nan());
        assert!(ay.is_nan());
    }

    #[test]
    fn softening_regularizes_the_pivot() {
        let (ax, ay) = eval(SpringLaw::Cartesian, 0.0, 0.0, 1e-3);
        assert_eq!(ax, 0.0);
        assert!(approx_eq!(f64, ay, -9.81, epsilon = 1e-12));
    }

    #[test]
    fn angle_law_stays_finite_on_the_pivot() {
        let (ax, ay) = eval(SpringLaw::AngleDecomposed, 0.0, 0.0, 0.0);
        assert!(ax.is_finite());
        assert!(ay.is_finite());
    }
}
