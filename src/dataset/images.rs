//! Image-folder datasets.
//!
//! Decoding and resizing are delegated to the `image` crate; this module
//! only turns decoded pixels into tensors and pairs them with class labels.

use std::fs;
use std::path::Path;

use image::imageops::FilterType;
use image::DynamicImage;

use crate::dataset::classes::class_directories;
use crate::error::{Error, Result};
use crate::math::tensor::Tensor;

/// Target geometry every image is resized and converted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageShape {
    pub width: u32,
    pub height: u32,
    /// 1 (grayscale), 3 (RGB) or 4 (RGBA).
    pub channels: u32,
}

impl ImageShape {
    pub fn new(width: u32, height: u32, channels: u32) -> Result<ImageShape> {
        if width == 0 || height == 0 {
            return Err(Error::Allocation(format!("image size {}x{} is empty", width, height)));
        }
        if !matches!(channels, 1 | 3 | 4) {
            return Err(Error::Shape(format!("unsupported channel count {}", channels)));
        }
        Ok(ImageShape { width, height, channels })
    }

    /// Flattened input width a network needs for images of this shape.
    pub fn input_size(&self) -> usize {
        self.width as usize * self.height as usize * self.channels as usize
    }
}

/// Resizes `img` exactly to `shape`, converts its channels and normalizes
/// pixels to `[0, 1]`. The result has shape `[height, width, channels]`.
pub fn image_to_tensor(img: &DynamicImage, shape: ImageShape) -> Result<Tensor> {
    let resized = img.resize_exact(shape.width, shape.height, FilterType::Lanczos3);
    let raw = match shape.channels {
        1 => resized.to_luma8().into_raw(),
        3 => resized.to_rgb8().into_raw(),
        4 => resized.to_rgba8().into_raw(),
        other => return Err(Error::Shape(format!("unsupported channel count {}", other))),
    };
    let data = raw.into_iter().map(|px| px as f32 / 255.0).collect();
    Tensor::from_data(
        &[shape.height as usize, shape.width as usize, shape.channels as usize],
        data,
    )
}

/// Decoded images with their class labels.
#[derive(Debug, Clone)]
pub struct ImageDataset {
    images: Vec<Tensor>,
    labels: Vec<usize>,
    class_names: Vec<String>,
}

impl ImageDataset {
    /// Loads every decodable image under `path`, one subdirectory per class.
    ///
    /// Classes are labelled in name order. Only regular files are read
    /// (symlinks are not followed); files the decoder rejects are skipped
    /// with a warning. An unreadable class folder is an [`Error::Directory`].
    pub fn load<P: AsRef<Path>>(path: P, shape: ImageShape) -> Result<ImageDataset> {
        let classes = class_directories(path.as_ref())?;
        let mut images = Vec::new();
        let mut labels = Vec::new();

        for class in &classes {
            let unreadable = |e: std::io::Error| {
                Error::Directory(format!("cannot open directory {}: {}", class.path.display(), e))
            };
            let mut files = Vec::new();
            for entry in fs::read_dir(&class.path).map_err(unreadable)? {
                let entry = entry.map_err(unreadable)?;
                if entry.file_type().map_err(unreadable)?.is_file() {
                    files.push(entry.path());
                }
            }
            files.sort();

            for file in files {
                match image::open(&file) {
                    Ok(img) => {
                        images.push(image_to_tensor(&img, shape)?);
                        labels.push(class.label);
                    }
                    Err(e) => log::warn!("skipping {}: {}", file.display(), e),
                }
            }
        }

        log::info!(
            "loaded {} image(s) across {} class(es) from {}",
            images.len(),
            classes.len(),
            path.as_ref().display()
        );
        Ok(ImageDataset {
            images,
            labels,
            class_names: classes.into_iter().map(|c| c.name).collect(),
        })
    }

    pub fn num_samples(&self) -> usize {
        self.images.len()
    }

    pub fn num_classes(&self) -> usize {
        self.class_names.len()
    }

    pub fn images(&self) -> &[Tensor] {
        &self.images
    }

    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    pub fn class_names(&self) -> &[String] {
        &self.class_names
    }
}
