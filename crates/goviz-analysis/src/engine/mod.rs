//! Analysis engine. `visual` projects syntax trees into renderable trees.

pub mod visual;
