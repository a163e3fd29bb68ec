use std::collections::HashMap;

use scrawl_engine::scene::Shape;
use scrawl_engine::text::FontId;

use crate::parse;
use crate::{Arity, InterpError};

/// Builds a shape from its argument tokens. Called only after the declared
/// [`Arity`] has been checked.
pub type ShapeCtor = fn(&[String]) -> Result<Shape, InterpError>;

struct Maker {
    arity: Arity,
    ctor: ShapeCtor,
}

/// Maps a shape type keyword to its arity rule and constructor.
pub struct ShapeFactory {
    makers: HashMap<String, Maker>,
}

impl ShapeFactory {
    /// Factory with every built-in shape type registered.
    pub fn new() -> Self {
        let mut factory = Self::empty();
        factory.register("text", Arity::AtLeast(1), make_text);
        factory.register("ellipse", Arity::Exactly(2), make_ellipse);
        factory.register("circle", Arity::Exactly(1), make_circle);
        factory.register("polygon", Arity::Pairs, make_polygon);
        factory.register("rectangle", Arity::Exactly(2), make_rectangle);
        factory.register("square", Arity::Exactly(1), make_square);
        factory.register("triangle", Arity::Exactly(6), make_triangle);
        factory.register("equilateral", Arity::Exactly(1), make_equilateral);
        factory.register("diamond", Arity::Exactly(2), make_diamond);
        factory
    }

    pub fn empty() -> Self {
        Self { makers: HashMap::new() }
    }

    /// Adds or replaces the constructor for `keyword`.
    pub fn register(&mut self, keyword: impl Into<String>, arity: Arity, ctor: ShapeCtor) {
        self.makers.insert(keyword.into(), Maker { arity, ctor });
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.makers.contains_key(keyword)
    }

    /// Registered keywords, sorted.
    pub fn keywords(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.makers.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn make(&self, keyword: &str, args: &[String]) -> Result<Shape, InterpError> {
        let maker = self
            .makers
            .get(keyword)
            .ok_or_else(|| InterpError::UnknownShapeType(keyword.to_string()))?;
        maker.arity.check(keyword, args)?;
        let shape = (maker.ctor)(args)?;
        log::trace!("made {} from {:?}", keyword, args);
        Ok(shape)
    }
}

impl Default for ShapeFactory {
    fn default() -> Self {
        Self::new()
    }
}

// ── constructors ──────────────────────────────────────────────────────────

fn make_text(args: &[String]) -> Result<Shape, InterpError> {
    let font = FontId::lookup(&args[0]).ok_or_else(|| InterpError::UnknownFont(args[0].clone()))?;
    Ok(Shape::text(font, args[1..].join(" ")))
}

fn positive(token: &str) -> Result<f32, InterpError> {
    let v = parse::number(token)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(InterpError::InvalidArgument(format!("{} must be positive", token)))
    }
}

fn make_ellipse(args: &[String]) -> Result<Shape, InterpError> {
    Ok(Shape::ellipse(positive(&args[0])?, positive(&args[1])?))
}

fn make_circle(args: &[String]) -> Result<Shape, InterpError> {
    Ok(Shape::circle(positive(&args[0])?))
}

fn make_polygon(args: &[String]) -> Result<Shape, InterpError> {
    let vertices = parse::points(args)?;
    // Pairs arity guarantees at least one vertex.
    Shape::polygon(vertices).ok_or_else(|| InterpError::argument_count("polygon", Arity::Pairs, 0))
}

fn make_rectangle(args: &[String]) -> Result<Shape, InterpError> {
    Ok(Shape::rectangle(parse::number(&args[0])?, parse::number(&args[1])?))
}

fn make_square(args: &[String]) -> Result<Shape, InterpError> {
    Ok(Shape::square(parse::number(&args[0])?))
}

fn make_triangle(args: &[String]) -> Result<Shape, InterpError> {
    let v = parse::points(args)?;
    Ok(Shape::triangle([v[0], v[1], v[2]]))
}

fn make_equilateral(args: &[String]) -> Result<Shape, InterpError> {
    Ok(Shape::equilateral(parse::number(&args[0])?))
}

fn make_diamond(args: &[String]) -> Result<Shape, InterpError> {
    Ok(Shape::diamond(parse::number(&args[0])?, parse::number(&args[1])?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrawl_engine::coords::Point;
    use scrawl_engine::scene::ShapeTag;

    fn args(s: &str) -> Vec<String> {
        s.split_whitespace().map(str::to_string).collect()
    }

    fn make(keyword: &str, rest: &str) -> Result<Shape, InterpError> {
        ShapeFactory::new().make(keyword, &args(rest))
    }

    // ── lookup ────────────────────────────────────────────────────────────

    #[test]
    fn unknown_type() {
        assert_eq!(make("hexagon", "1").unwrap_err(), InterpError::UnknownShapeType("hexagon".into()));
    }

    #[test]
    fn lists_builtin_keywords() {
        assert_eq!(
            ShapeFactory::new().keywords(),
            vec![
                "circle", "diamond", "ellipse", "equilateral", "polygon", "rectangle", "square",
                "text", "triangle"
            ]
        );
    }

    #[test]
    fn custom_type_can_be_registered() {
        fn make_unit(_: &[String]) -> Result<Shape, InterpError> {
            Ok(Shape::square(1.0))
        }
        let mut factory = ShapeFactory::empty();
        assert!(!factory.contains("unit"));
        factory.register("unit", Arity::Exactly(0), make_unit);
        assert_eq!(factory.make("unit", &[]).unwrap(), Shape::square(1.0));
    }

    // ── arity ─────────────────────────────────────────────────────────────

    #[test]
    fn fixed_arity_is_total() {
        assert!(matches!(make("ellipse", "1.0"), Err(InterpError::ArgumentCount { got: 1, .. })));
        assert!(matches!(make("ellipse", "1.0 2.0 3.0"), Err(InterpError::ArgumentCount { got: 3, .. })));
        assert!(make("ellipse", "1.0 2.0").is_ok());
        assert!(matches!(make("triangle", "0 0 1 1 2"), Err(InterpError::ArgumentCount { .. })));
        assert!(matches!(make("equilateral", ""), Err(InterpError::ArgumentCount { .. })));
        assert!(matches!(make("square", "1 2"), Err(InterpError::ArgumentCount { .. })));
    }

    #[test]
    fn polygon_needs_pairs() {
        let p = make("polygon", "0 0 1 1 2 2").unwrap();
        assert_eq!(p.vertices().unwrap().len(), 3);
        assert!(matches!(make("polygon", "0 0 1"), Err(InterpError::ArgumentCount { .. })));
        assert!(matches!(make("polygon", ""), Err(InterpError::ArgumentCount { got: 0, .. })));
    }

    // ── numbers ───────────────────────────────────────────────────────────

    #[test]
    fn reports_offending_token() {
        assert_eq!(make("rectangle", "4 four").unwrap_err(), InterpError::Parse("four".into()));
        assert_eq!(make("polygon", "0 0 x 1").unwrap_err(), InterpError::Parse("x".into()));
    }

    #[test]
    fn ellipse_dimensions_must_be_positive() {
        assert!(matches!(make("circle", "0"), Err(InterpError::InvalidArgument(_))));
        assert!(matches!(make("ellipse", "3 -1"), Err(InterpError::InvalidArgument(_))));
    }

    // ── derived shapes ────────────────────────────────────────────────────

    #[test]
    fn square_equals_rectangle_geometry() {
        let sq = make("square", "5").unwrap();
        let rect = make("rectangle", "5 5").unwrap();
        assert_eq!(sq.vertices(), rect.vertices());
        assert_eq!(sq.tag(), ShapeTag::Square);
        assert_eq!(rect.tag(), ShapeTag::Rectangle);
    }

    #[test]
    fn circle_equals_ellipse_dimension() {
        assert_eq!(make("circle", "4").unwrap().dimension(), make("ellipse", "4 4").unwrap().dimension());
    }

    #[test]
    fn triangle_takes_three_points() {
        let t = make("triangle", "0 0 4 0 2 3").unwrap();
        assert_eq!(
            t.vertices().unwrap(),
            &[Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(2.0, 3.0)]
        );
    }

    // ── text ──────────────────────────────────────────────────────────────

    #[test]
    fn text_joins_label_tokens() {
        let t = make("text", "Times-Roman-24 Hello   big world").unwrap();
        assert_eq!(t.describe("#0"), "#0->text: Times-Roman-24 \"Hello big world\"");
    }

    #[test]
    fn text_label_may_be_empty() {
        let t = make("text", "Fixed-8x13").unwrap();
        assert_eq!(t.describe("#0"), "#0->text: Fixed-8x13 \"\"");
    }

    #[test]
    fn text_needs_known_font() {
        assert_eq!(make("text", "Wingdings hi").unwrap_err(), InterpError::UnknownFont("Wingdings".into()));
        assert!(matches!(make("text", ""), Err(InterpError::ArgumentCount { .. })));
    }
}
