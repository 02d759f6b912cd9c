//! Text rendering of entities, as `<Space>::<Kind> (x, y[, z])`

use super::base_types::*;
use crate::{coords::Dim, space::Space};
use std::fmt;

impl<S, D: Dim, R: KindOf<N>, N: Normalization> Entity<S, D, R, N> {
    /// `Vector`, `Point2`, `NormalizedVector`...
    pub fn kind_name() -> String {
        format!("{}{}", R::BASE_NAME, D::SUFFIX)
    }

    /// Render only some part of the entity
    pub fn formatted(&self, part: Part) -> Formatted<'_, S, D, R, N> {
        Formatted { entity: self, part }
    }
}

/// Write `(x, y[, z])`, forwarding the formatter's precision to each component
fn write_components(f: &mut fmt::Formatter<'_>, components: &[f64]) -> fmt::Result {
    f.write_str("(")?;
    for (i, c) in components.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write_component(f, *c)?;
    }
    f.write_str(")")
}

fn write_component(f: &mut fmt::Formatter<'_>, c: f64) -> fmt::Result {
    match f.precision() {
        Some(p) => write!(f, "{c:.p$}"),
        None => write!(f, "{c}"),
    }
}

pub(crate) fn write_entity(
    f: &mut fmt::Formatter<'_>,
    space: &str,
    kind: &str,
    components: &[f64],
) -> fmt::Result {
    write!(f, "{space}::{kind} ")?;
    write_components(f, components)
}

/// `View::Vector (1, 2, 3)`. The precision flag is honored: `{:.2}` renders
/// `View::Vector (1.00, 2.00, 3.00)`
impl<S: Space, D: Dim, R: KindOf<N>, N: Normalization> fmt::Display for Entity<S, D, R, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_entity(f, S::NAME, &Self::kind_name(), self.as_slice())
    }
}

impl<S: Space, D: Dim, R: KindOf<N>, N: Normalization> fmt::Debug for Entity<S, D, R, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = format!("{}<{}>", Self::kind_name(), S::NAME);
        let mut s = f.debug_struct(&name);
        for (field, c) in ["x", "y", "z"].iter().zip(self.iter()) {
            s.field(field, &c);
        }
        s.finish()
    }
}

/// Which part of an entity [`Formatted`] renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    /// The whole entity, like its `Display` impl
    Full,
    /// Only the name of the Space
    Space,
    /// Only the name of the kind
    Kind,
    /// Only one component. Out-of-range indices render nothing
    Component(usize),
}

/// Renders part of an entity. See [`Entity::formatted`]
pub struct Formatted<'a, S, D: Dim, R, N> {
    entity: &'a Entity<S, D, R, N>,
    part: Part,
}

impl<S: Space, D: Dim, R: KindOf<N>, N: Normalization> fmt::Display for Formatted<'_, S, D, R, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.part {
            Part::Full => fmt::Display::fmt(self.entity, f),
            Part::Space => f.write_str(S::NAME),
            Part::Kind => f.write_str(&Entity::<S, D, R, N>::kind_name()),
            Part::Component(i) => match self.entity.at(i) {
                Ok(c) => write_component(f, c),
                Err(_) => Ok(()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{space::test_spaces::*, test_macros::*, *};

    simple_eqs! {
        vector3: Vector3::<View>::new(1.0, 2.0, 3.0).to_string() => "View::Vector (1, 2, 3)",
        point2: Point2::<Patient>::new(0.5, -1.0).to_string() => "Patient::Point2 (0.5, -1)",
        normalized: NormalizedVector3::<Image>::x_axis().to_string() => "Image::NormalizedVector (1, 0, 0)",
        precision: format!("{:.2}", Point3::<View>::new(1.0, 2.5, 3.0)) => "View::Point (1.00, 2.50, 3.00)",
        kind_name: NormalizedVector2::<View>::kind_name() => "NormalizedVector2",
        space_only: Vector3::<View>::zero().formatted(Part::Space).to_string() => "View",
        kind_only: Point3::<View>::origin().formatted(Part::Kind).to_string() => "Point",
        component_only: format!("{:.1}", Vector2::<View>::new(1.0, 2.26).formatted(Part::Component(1))) => "2.3",
        missing_component: Vector2::<View>::new(1.0, 2.0).formatted(Part::Component(2)).to_string() => "",
        full: Vector2::<View>::new(1.0, 2.0).formatted(Part::Full).to_string() => "View::Vector2 (1, 2)",
        debug: format!("{:?}", Vector2::<View>::new(1.0, 2.0)) => "Vector2<View> { x: 1.0, y: 2.0 }"
    }
}
