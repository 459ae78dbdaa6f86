//! Shape catalog and piece movement tests

use std::sync::Arc;

use gridfall::game::{Catalog, Piece, ShapeDefinition};
use ratatui::style::Color;

fn occupied(catalog: &Catalog, name: &str, rotation: usize) -> Vec<(i32, i32)> {
    catalog.find(name).unwrap().frame(rotation).occupied().collect()
}

#[test]
fn test_standard_catalog_has_five_shapes() {
    let catalog = Catalog::standard().unwrap();
    let names: Vec<&str> = catalog.all_shapes().iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["bar", "square", "t", "l", "mirrored-l"]);
}

#[test]
fn test_frame_counts() {
    let catalog = Catalog::standard().unwrap();
    let counts: Vec<usize> = catalog.all_shapes().iter().map(|s| s.frame_count()).collect();
    assert_eq!(counts, vec![2, 1, 4, 4, 4]);
}

#[test]
fn test_every_frame_has_four_cells() {
    let catalog = Catalog::standard().unwrap();
    for shape in catalog.all_shapes() {
        for frame in shape.frames() {
            assert_eq!(frame.occupied().count(), 4, "{}", shape.name());
        }
    }
}

#[test]
fn test_bar_frames() {
    let catalog = Catalog::standard().unwrap();
    let bar = catalog.find("bar").unwrap();
    assert_eq!((bar.frame(0).rows(), bar.frame(0).cols()), (1, 4));
    assert_eq!((bar.frame(1).rows(), bar.frame(1).cols()), (4, 1));
}

#[test]
fn test_t_frames() {
    let catalog = Catalog::standard().unwrap();
    assert_eq!(occupied(&catalog, "t", 0), vec![(1, 0), (0, 1), (1, 1), (2, 1)]);
    assert_eq!(occupied(&catalog, "t", 1), vec![(0, 0), (0, 1), (1, 1), (0, 2)]);
    assert_eq!(occupied(&catalog, "t", 2), vec![(0, 0), (1, 0), (2, 0), (1, 1)]);
    assert_eq!(occupied(&catalog, "t", 3), vec![(1, 0), (0, 1), (1, 1), (1, 2)]);
}

#[test]
fn test_l_and_mirrored_l_are_mirror_images() {
    let catalog = Catalog::standard().unwrap();
    for rotation in [0, 2] {
        let l = catalog.find("l").unwrap().frame(rotation).clone();
        let mirrored = catalog.find("mirrored-l").unwrap().frame(rotation).clone();
        for row in 0..l.rows() {
            for col in 0..l.cols() {
                assert_eq!(
                    l.is_occupied(row, col),
                    mirrored.is_occupied(row, l.cols() - 1 - col)
                );
            }
        }
    }
}

#[test]
fn test_spawn_position() {
    let catalog = Catalog::standard().unwrap();
    let square = catalog.find("square").unwrap().clone();
    let piece = Piece::spawn(square, Color::Yellow, 10);
    assert_eq!((piece.x, piece.y, piece.rotation), (4, 0, 0));

    let dot = Arc::new(ShapeDefinition::new("dot", &[&[&[1]]]).unwrap());
    assert_eq!(Piece::spawn(dot, Color::Yellow, 7).x, 2);
}

#[test]
fn test_rotation_is_cyclic() {
    let catalog = Catalog::standard().unwrap();
    for shape in catalog.all_shapes() {
        let original = Piece::spawn(shape.clone(), Color::Red, 10);
        let mut piece = original.clone();
        for _ in 0..shape.frame_count() {
            piece = piece.rotated();
        }
        assert_eq!(piece, original, "{}", shape.name());
    }
}

#[test]
fn test_candidates_leave_original_untouched() {
    let catalog = Catalog::standard().unwrap();
    let original = Piece::spawn(catalog.find("t").unwrap().clone(), Color::Red, 10);
    let copy = original.clone();

    let moved = original.translated(-3, 2);
    let rotated = original.rotated();

    assert_eq!(original, copy);
    assert_eq!((moved.x, moved.y), (1, 2));
    assert_eq!(rotated.rotation, 1);
}

#[test]
fn test_current_frame_follows_rotation() {
    let catalog = Catalog::standard().unwrap();
    let bar = catalog.find("bar").unwrap().clone();
    let piece = Piece::spawn(bar, Color::Red, 10).rotated();

    let blocks: Vec<(i32, i32)> = piece.blocks().collect();
    assert_eq!(piece.current_frame().rows(), 4);
    assert_eq!(blocks, vec![(4, 0), (4, 1), (4, 2), (4, 3)]);
}
