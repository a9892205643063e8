//! Sidle — a bezel-swipe side panel ("drawer") for touch interfaces.
//!
//! The drawer opens programmatically ([`Drawer::show`]) or from an edge
//! swipe classified by [`EdgeSwipe`]. One scalar offset (0 = closed,
//! panel width = open) drives every visual effect through
//! [`PositionProxy`]; transitions run on whatever tween driver the host
//! injects.
//!
//! ```no_run
//! # use std::rc::Rc;
//! # use sidle::{DrawerBuilder, EdgeSwipe};
//! # fn demo(host: Rc<dyn sidle_core::WindowHost>, driver: Rc<dyn sidle_animation::TweenDriver>) {
//! let drawer = DrawerBuilder::new()
//!     .margin(sidle_core::Dp(48.0))
//!     .build(host, driver)
//!     .expect("host surfaces available");
//! let swipe = EdgeSwipe::new(drawer.clone());
//! // feed raw pointer events into swipe.classify(..) from the input pipeline
//! # }
//! ```

mod config;
mod drawer;
mod geometry;
mod gesture;
mod proxy;

pub use config::{DrawerConfig, EffectConfig, LandscapeWidth};
pub use drawer::{Drawer, DrawerBuilder};
pub use geometry::PanelGeometry;
pub use gesture::{Classification, EdgeSwipe};
pub use proxy::{PositionProxy, SurfaceSet};
