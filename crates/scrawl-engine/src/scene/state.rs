use crate::coords::Point;
use crate::paint::Color;
use crate::text::TextMetrics;

use super::{DrawList, ShapeArena, ShapeId, Style};

/// One placement of a shape definition.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlacedObject {
    pub shape: ShapeId,
    pub position: Point,
    pub color: Color,
}

impl PlacedObject {
    #[inline]
    pub const fn new(shape: ShapeId, position: Point, color: Color) -> Self {
        Self { shape, position, color }
    }
}

/// Placed objects in placement order, plus the current selection.
///
/// Objects are append-only. Selection is view state and does not alter them.
#[derive(Debug, Default)]
pub struct Scene {
    objects: Vec<PlacedObject>,
    selected: Option<usize>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an object and returns its index.
    pub fn push(&mut self, object: PlacedObject) -> usize {
        self.objects.push(object);
        self.objects.len() - 1
    }

    #[inline]
    pub fn objects(&self) -> &[PlacedObject] {
        &self.objects
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Selects the object at `index`. Returns `false` (and keeps the previous
    /// selection) when out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.objects.len() {
            self.selected = Some(index);
            true
        } else {
            false
        }
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    #[inline]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Records every object in placement order, each annotated with its
    /// index; the selected object also gets a border in `style`.
    pub fn render(&self, shapes: &ShapeArena, style: &Style, metrics: &dyn TextMetrics) -> DrawList {
        let mut list = DrawList::new();
        for (i, obj) in self.objects.iter().enumerate() {
            let Some(shape) = shapes.get(obj.shape) else {
                log::warn!("object {} refers to missing shape {}", i, obj.shape);
                continue;
            };
            shape.draw(&mut list, obj.position, obj.color, Some(i));
            if self.selected == Some(i) {
                shape.draw_border(&mut list, obj.position, &style.border, metrics);
            }
        }
        log::trace!("rendered {} objects into {} commands", self.objects.len(), list.len());
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{DrawCmd, Shape};
    use crate::text::FontSystem;

    fn scene_with_two(arena: &mut ShapeArena) -> Scene {
        let sq = arena.insert(Shape::square(2.0));
        let mut scene = Scene::new();
        scene.push(PlacedObject::new(sq, Point::new(0.0, 0.0), Color::new(255, 0, 0)));
        scene.push(PlacedObject::new(sq, Point::new(10.0, 0.0), Color::new(0, 255, 0)));
        scene
    }

    #[test]
    fn render_annotates_each_object_with_its_index() {
        let mut arena = ShapeArena::new();
        let scene = scene_with_two(&mut arena);
        let list = scene.render(&arena, &Style::default(), &FontSystem::new());

        let labels: Vec<&str> = list
            .items()
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Text(t) => Some(t.text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(labels, vec!["0", "1"]);
        assert!(!list.items().iter().any(|c| matches!(c, DrawCmd::Outline(_))));
    }

    #[test]
    fn selected_object_gets_scene_border() {
        let mut arena = ShapeArena::new();
        let mut scene = scene_with_two(&mut arena);
        assert!(scene.select(1));
        assert!(!scene.select(2));
        assert_eq!(scene.selected(), Some(1));

        let style = Style::default();
        let list = scene.render(&arena, &style, &FontSystem::new());
        let outlines: Vec<_> = list
            .items()
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Outline(o) => Some(o),
                _ => None,
            })
            .collect();
        assert_eq!(outlines.len(), 1);
        assert_eq!(outlines[0].color, style.border.color);
        assert_eq!(outlines[0].width, 4.0);
        assert_eq!(outlines[0].points[0], Point::new(12.0, 2.0));

        scene.deselect();
        assert_eq!(scene.selected(), None);
    }

    #[test]
    fn shared_definition_is_not_copied() {
        let mut arena = ShapeArena::new();
        let scene = scene_with_two(&mut arena);
        assert_eq!(arena.len(), 1);
        assert_eq!(scene.objects()[0].shape, scene.objects()[1].shape);
    }
}
