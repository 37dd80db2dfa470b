//! # TUI Components
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `CarouselButton`: a labelled Prev/Next button
//! - `CarouselSlide`: one slide's image frame and caption
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `Carousel`: lays out slide and buttons, and turns key presses and
//!   button clicks into `CarouselEvent`s
//!
//! Components receive external data as "props", never the controller
//! itself. The run loop reads the controller and hands the components only
//! what they draw.
//!
//! ```text
//! components/
//! ├── mod.rs              (this file)
//! ├── carousel.rs         (layout, hit-testing, events)
//! ├── carousel_button.rs  (Prev / Next)
//! └── carousel_slide.rs   (image frame + caption)
//! ```

mod carousel;
mod carousel_button;
mod carousel_slide;

pub use carousel::{Carousel, CarouselEvent, CarouselState};
pub use carousel_button::CarouselButton;
pub use carousel_slide::CarouselSlide;
