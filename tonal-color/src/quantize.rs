//! Modified median cut quantization.
//!
//! Pixels are reduced to 15-bit RGB, counted, and the resulting color cloud is
//! split into boxes until there are enough of them. Each box becomes one
//! [`Swatch`] holding the population-weighted mean of its colors.

use std::{cmp::Ordering, collections::BinaryHeap};

use image::RgbaImage;
use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::Argb;

const QUANTIZE_WORD_WIDTH: u32 = 5;
const QUANTIZE_WORD_MASK: u32 = (1 << QUANTIZE_WORD_WIDTH) - 1;
const HISTOGRAM_SIZE: usize = 1 << (QUANTIZE_WORD_WIDTH * 3);

const BLACK_MAX_LIGHTNESS: f32 = 0.05;
const WHITE_MIN_LIGHTNESS: f32 = 0.95;

// Pixels per rayon job when building the histogram.
const HISTOGRAM_CHUNK: usize = 4096;

/// A representative color and the number of pixels it stands for.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Swatch {
    rgb: Argb,
    population: u32,
    hsl: [f32; 3],
}

impl Swatch {
    /// Creates a swatch for an opaque color.
    pub fn new(rgb: Argb, population: u32) -> Self {
        let rgb = rgb.with_alpha(255);
        Self {
            rgb,
            population,
            hsl: rgb.to_hsl(),
        }
    }

    /// The swatch color, always opaque.
    #[inline]
    pub fn rgb(&self) -> Argb {
        self.rgb
    }

    /// Number of pixels represented.
    #[inline]
    pub fn population(&self) -> u32 {
        self.population
    }

    /// `[hue, saturation, lightness]`, see [`Argb::to_hsl`].
    #[inline]
    pub fn hsl(&self) -> [f32; 3] {
        self.hsl
    }
}

/// Reduces `image` to at most `max_colors` swatches.
///
/// Pixels with alpha below `min_alpha` are skipped. Colors that read as black,
/// white or skin-tone red are dropped both before and after quantization, so
/// the result may hold fewer swatches than `max_colors`, or none at all.
#[instrument(level = "debug", skip(image), fields(width = image.width(), height = image.height()))]
pub fn quantize(image: &RgbaImage, max_colors: usize, min_alpha: u8) -> Vec<Swatch> {
    let histogram = build_histogram(image.as_raw(), min_alpha);

    let mut colors: Vec<u16> = histogram
        .iter()
        .enumerate()
        .filter(|&(color, &count)| count > 0 && !should_ignore(approximate_to_rgb888(color as u16)))
        .map(|(color, _)| color as u16)
        .collect();
    debug!(distinct = colors.len(), "histogram built");

    if colors.len() <= max_colors {
        return colors
            .iter()
            .map(|&color| Swatch::new(approximate_to_rgb888(color), histogram[color as usize]))
            .collect();
    }

    let boxes = split_boxes(&mut colors, &histogram, max_colors);
    let swatches: Vec<Swatch> = boxes
        .iter()
        .map(|vbox| vbox.average_color(&colors, &histogram))
        .filter(|swatch| !should_ignore(swatch.rgb()))
        .collect();
    debug!(boxes = boxes.len(), swatches = swatches.len(), "median cut finished");
    swatches
}

fn build_histogram(rgba: &[u8], min_alpha: u8) -> Vec<u32> {
    rgba.par_chunks(HISTOGRAM_CHUNK * 4)
        .fold(
            || vec![0u32; HISTOGRAM_SIZE],
            |mut histogram, chunk| {
                for pixel in chunk.chunks_exact(4) {
                    if pixel[3] < min_alpha {
                        continue;
                    }
                    histogram[quantize_from_rgb888(pixel[0], pixel[1], pixel[2]) as usize] += 1;
                }
                histogram
            },
        )
        .reduce(
            || vec![0u32; HISTOGRAM_SIZE],
            |mut a, b| {
                for (x, y) in a.iter_mut().zip(b) {
                    *x += y;
                }
                a
            },
        )
}

fn split_boxes(colors: &mut [u16], histogram: &[u32], max_colors: usize) -> Vec<Vbox> {
    let mut queue = BinaryHeap::with_capacity(max_colors);
    queue.push(Vbox::new(0, colors.len() - 1, colors, histogram));

    while queue.len() < max_colors {
        let Some(mut vbox) = queue.pop() else {
            break;
        };
        if !vbox.can_split() {
            queue.push(vbox);
            break;
        }
        let split = vbox.split(colors, histogram);
        queue.push(split);
        queue.push(vbox);
    }
    queue.into_vec()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Channel {
    Red,
    Green,
    Blue,
}

/// A box in 15-bit RGB space covering `colors[lower..=upper]`.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Vbox {
    lower: usize,
    upper: usize,
    population: u64,
    min: [u32; 3],
    max: [u32; 3],
}

impl Vbox {
    fn new(lower: usize, upper: usize, colors: &[u16], histogram: &[u32]) -> Self {
        let mut vbox = Self {
            lower,
            upper,
            population: 0,
            min: [0; 3],
            max: [0; 3],
        };
        vbox.fit(colors, histogram);
        vbox
    }

    fn volume(&self) -> u64 {
        (0..3)
            .map(|i| (self.max[i] - self.min[i] + 1) as u64)
            .product()
    }

    fn color_count(&self) -> usize {
        self.upper + 1 - self.lower
    }

    fn can_split(&self) -> bool {
        self.color_count() > 1
    }

    /// Recomputes the bounds and population from the colors the box covers.
    fn fit(&mut self, colors: &[u16], histogram: &[u32]) {
        let mut min = [u32::MAX; 3];
        let mut max = [0u32; 3];
        let mut population = 0u64;
        for &color in &colors[self.lower..=self.upper] {
            population += histogram[color as usize] as u64;
            for (i, component) in components(color).into_iter().enumerate() {
                min[i] = min[i].min(component);
                max[i] = max[i].max(component);
            }
        }
        self.min = min;
        self.max = max;
        self.population = population;
    }

    /// Splits off the upper half into a new box and shrinks this one to the
    /// lower half.
    fn split(&mut self, colors: &mut [u16], histogram: &[u32]) -> Vbox {
        let split_point = self.find_split_point(colors, histogram);
        let upper_box = Vbox::new(split_point + 1, self.upper, colors, histogram);
        self.upper = split_point;
        self.fit(colors, histogram);
        upper_box
    }

    fn longest_channel(&self) -> Channel {
        let length = |i: usize| self.max[i] - self.min[i];
        let (r, g, b) = (length(0), length(1), length(2));
        if r >= g && r >= b {
            Channel::Red
        } else if g >= r && g >= b {
            Channel::Green
        } else {
            Channel::Blue
        }
    }

    fn find_split_point(&self, colors: &mut [u16], histogram: &[u32]) -> usize {
        let channel = self.longest_channel();
        colors[self.lower..=self.upper].sort_unstable_by_key(|&color| sort_key(color, channel));

        let midpoint = self.population / 2;
        let mut count = 0u64;
        for i in self.lower..=self.upper {
            count += histogram[colors[i] as usize] as u64;
            if count >= midpoint {
                return (self.upper - 1).min(i);
            }
        }
        self.lower
    }

    fn average_color(&self, colors: &[u16], histogram: &[u32]) -> Swatch {
        let mut sums = [0u64; 3];
        let mut total = 0u64;
        for &color in &colors[self.lower..=self.upper] {
            let population = histogram[color as usize] as u64;
            total += population;
            for (sum, component) in sums.iter_mut().zip(components(color)) {
                *sum += population * component as u64;
            }
        }
        let [r, g, b] = sums.map(|sum| (sum as f64 / total.max(1) as f64).round() as u32);
        Swatch::new(
            Argb::from_rgb((r << 3) as u8, (g << 3) as u8, (b << 3) as u8),
            total as u32,
        )
    }
}

impl Ord for Vbox {
    fn cmp(&self, other: &Self) -> Ordering {
        self.volume()
            .cmp(&other.volume())
            .then_with(|| other.lower.cmp(&self.lower))
    }
}

impl PartialOrd for Vbox {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[inline]
fn quantize_from_rgb888(r: u8, g: u8, b: u8) -> u16 {
    let r = (r >> 3) as u16;
    let g = (g >> 3) as u16;
    let b = (b >> 3) as u16;
    (r << 10) | (g << 5) | b
}

#[inline]
fn components(color: u16) -> [u32; 3] {
    let color = color as u32;
    [
        (color >> 10) & QUANTIZE_WORD_MASK,
        (color >> 5) & QUANTIZE_WORD_MASK,
        color & QUANTIZE_WORD_MASK,
    ]
}

/// Orders colors by `channel` first, then by the remaining two.
fn sort_key(color: u16, channel: Channel) -> u32 {
    let [r, g, b] = components(color);
    match channel {
        Channel::Red => (r << 10) | (g << 5) | b,
        Channel::Green => (g << 10) | (r << 5) | b,
        Channel::Blue => (b << 10) | (g << 5) | r,
    }
}

fn approximate_to_rgb888(color: u16) -> Argb {
    let [r, g, b] = components(color);
    Argb::from_rgb((r << 3) as u8, (g << 3) as u8, (b << 3) as u8)
}

fn should_ignore(color: Argb) -> bool {
    let [h, s, l] = color.to_hsl();
    l <= BLACK_MAX_LIGHTNESS || l >= WHITE_MIN_LIGHTNESS || is_near_red_i_line(h, s)
}

// Skin tones.
fn is_near_red_i_line(hue: f32, saturation: f32) -> bool {
    (10.0..=37.0).contains(&hue) && saturation <= 0.82
}

#[cfg(test)]
mod tests {
    use image::Rgba;

    use super::*;

    fn solid(width: u32, height: u32, rgba: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba(rgba))
    }

    #[test]
    fn test_single_color_is_one_swatch() {
        let image = solid(20, 10, [0x30, 0x60, 0xC0, 255]);
        let swatches = quantize(&image, 16, 1);
        assert_eq!(swatches.len(), 1);
        assert_eq!(swatches[0].rgb(), Argb::from_rgb(0x30, 0x60, 0xC0));
        assert_eq!(swatches[0].population(), 200);
    }

    #[test]
    fn test_transparent_pixels_are_skipped() {
        let image = solid(8, 8, [0x30, 0x60, 0xC0, 0]);
        assert!(quantize(&image, 16, 1).is_empty());
    }

    #[test]
    fn test_black_white_and_skin_are_dropped() {
        let mut image = solid(3, 1, [0, 0, 0, 255]);
        image.put_pixel(1, 0, Rgba([255, 255, 255, 255]));
        // hsl(25, 0.5, 0.6)
        image.put_pixel(2, 0, Rgba([204, 153, 102, 255]));
        assert!(quantize(&image, 16, 1).is_empty());
    }

    #[test]
    fn test_many_colors_are_cut_down() {
        let mut image = RgbaImage::new(64, 64);
        for (x, y, pixel) in image.enumerate_pixels_mut() {
            *pixel = Rgba([(x * 4) as u8, (y * 4) as u8, 200, 255]);
        }
        let swatches = quantize(&image, 16, 1);
        assert!(!swatches.is_empty());
        assert!(swatches.len() <= 16);
        let total: u32 = swatches.iter().map(Swatch::population).sum();
        assert!(total <= 64 * 64);
    }

    #[test]
    fn test_quantize_is_deterministic() {
        let mut image = RgbaImage::new(50, 40);
        for (x, y, pixel) in image.enumerate_pixels_mut() {
            *pixel = Rgba([(x * 5) as u8, 40 + y as u8, (x * y % 256) as u8, 255]);
        }
        assert_eq!(quantize(&image, 16, 1), quantize(&image, 16, 1));
    }

    #[test]
    fn test_split_stops_at_max_colors() {
        let mut colors: Vec<u16> = (0..100u16).map(|i| i * 7).collect();
        let mut histogram = vec![0u32; HISTOGRAM_SIZE];
        for &color in &colors {
            histogram[color as usize] = 3;
        }
        let boxes = split_boxes(&mut colors, &histogram, 8);
        assert_eq!(boxes.len(), 8);
        let covered: usize = boxes.iter().map(Vbox::color_count).sum();
        assert_eq!(covered, 100);
    }
}
