pub mod carousel;
pub mod constants;
pub mod content;
pub mod image_slider;
pub mod nav;
pub mod reveal;
pub mod site;
pub mod state;
pub mod surface;
pub mod tabs;
pub mod timer;

pub use carousel::{Carousel, CarouselConfig};
pub use image_slider::ImageSlider;
pub use site::Site;
pub use surface::{HeadlessSurface, SlideSurface};
