//! Generic grid over the stacked overland planes

use serde::{Deserialize, Serialize};

use crate::core::types::MapCoord;

/// Dense 3-D grid indexed by (plane, y, x)
///
/// All planes share one width and height. Horizontal wrap is a property of
/// the map, not of individual queries, so it is fixed at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapGrid<T: Clone + Default> {
    planes: usize,
    width: usize,
    height: usize,
    wrap_x: bool,
    data: Vec<T>,
}

impl<T: Clone + Default> MapGrid<T> {
    pub fn new(planes: usize, width: usize, height: usize, wrap_x: bool) -> Self {
        Self {
            planes,
            width,
            height,
            wrap_x,
            data: vec![T::default(); planes * width * height],
        }
    }

    pub fn planes(&self) -> usize {
        self.planes
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn wrap_x(&self) -> bool {
        self.wrap_x
    }

    /// Normalize a coordinate, applying horizontal wrap; `None` off-map
    pub fn normalize(&self, coord: MapCoord) -> Option<MapCoord> {
        if (coord.plane as usize) >= self.planes {
            return None;
        }
        if coord.y < 0 || coord.y >= self.height as i32 {
            return None;
        }
        let x = if self.wrap_x {
            coord.x.rem_euclid(self.width as i32)
        } else if coord.x < 0 || coord.x >= self.width as i32 {
            return None;
        } else {
            coord.x
        };
        Some(MapCoord::new(coord.plane, x, coord.y))
    }

    fn index(&self, coord: MapCoord) -> Option<usize> {
        let c = self.normalize(coord)?;
        Some(
            (c.plane as usize) * self.width * self.height
                + (c.y as usize) * self.width
                + c.x as usize,
        )
    }

    #[inline]
    pub fn get(&self, coord: MapCoord) -> Option<&T> {
        self.index(coord).map(|i| &self.data[i])
    }

    #[inline]
    pub fn get_mut(&mut self, coord: MapCoord) -> Option<&mut T> {
        self.index(coord).map(move |i| &mut self.data[i])
    }

    #[inline]
    pub fn set(&mut self, coord: MapCoord, value: T) {
        if let Some(i) = self.index(coord) {
            self.data[i] = value;
        }
    }

    /// Iterate every coordinate in (plane, y, x) order
    pub fn coords(&self) -> impl Iterator<Item = MapCoord> + '_ {
        let (planes, width, height) = (self.planes, self.width, self.height);
        (0..planes).flat_map(move |p| {
            (0..height).flat_map(move |y| {
                (0..width).map(move |x| MapCoord::new(p as u8, x as i32, y as i32))
            })
        })
    }

    /// The up-to-8 on-map neighbors of a cell, same plane
    pub fn neighbors(&self, coord: MapCoord) -> Vec<MapCoord> {
        let mut out = Vec::with_capacity(8);
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let raw = MapCoord::new(coord.plane, coord.x + dx, coord.y + dy);
                if let Some(n) = self.normalize(raw) {
                    out.push(n);
                }
            }
        }
        out
    }

    /// A same-shaped grid of a different cell type
    pub fn same_shape<U: Clone + Default>(&self) -> MapGrid<U> {
        MapGrid::new(self.planes, self.width, self.height, self.wrap_x)
    }
}
