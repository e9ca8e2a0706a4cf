use raylib::prelude::*;

/// Panel colors used when no slide images are available.
fn placeholder_color(index: usize) -> Color {
    match index % 3 {
        0 => Color::new(92, 64, 51, 255),
        1 => Color::new(139, 90, 43, 255),
        _ => Color::new(60, 82, 66, 255),
    }
}

/// One hero slide: a photo, or a colored panel standing in for one.
pub struct HeroSlide {
    image: Option<Texture2D>,
    caption: String,
    color: Color,
}

impl HeroSlide {
    pub fn from_texture(image: Texture2D, caption: impl Into<String>) -> Self {
        Self {
            image: Some(image),
            caption: caption.into(),
            color: Color::BLACK,
        }
    }

    pub fn placeholder(index: usize) -> Self {
        Self {
            image: None,
            caption: format!("Slide {}", index + 1),
            color: placeholder_color(index),
        }
    }

    /// Fills `dest` like `object-fit: cover`, cropping the source around its center.
    pub fn draw(&self, d: &mut impl RaylibDraw, dest: Rectangle, alpha: f32) {
        let tint = Color::new(255, 255, 255, (alpha.clamp(0.0, 1.0) * 255.0) as u8);

        match &self.image {
            Some(image) => {
                let tex_width = image.width() as f32;
                let tex_height = image.height() as f32;

                let scale = (dest.width / tex_width).max(dest.height / tex_height);
                let source_width = dest.width / scale;
                let source_height = dest.height / scale;

                let source = Rectangle::new(
                    (tex_width - source_width) * 0.5,
                    (tex_height - source_height) * 0.5,
                    source_width,
                    source_height,
                );

                d.draw_texture_pro(image, source, dest, Vector2::new(0.0, 0.0), 0.0, tint);
            }
            None => {
                let color = Color::new(self.color.r, self.color.g, self.color.b, tint.a);
                d.draw_rectangle_rec(dest, color);
            }
        }

        d.draw_text(
            &self.caption,
            dest.x as i32 + 24,
            (dest.y + dest.height) as i32 - 44,
            24,
            Color::new(255, 255, 255, tint.a),
        );
    }
}
