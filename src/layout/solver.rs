use crate::{
    foundation::core::Dimensions,
    presets::{AspectRatio, FitMode, Resolution},
};

/// Resolve the output box for a conversion request.
///
/// The base box is the resolution preset's pixel box, or the source image's
/// own box for [`Resolution::Original`]. The fit mode then reconciles the
/// base box with either the source ratio ([`AspectRatio::Original`]) or the
/// requested ratio.
///
/// Pure arithmetic: deterministic, no I/O, no hidden state. Fractional
/// results truncate toward zero. The resolver never rounds to even values;
/// the conversion driver does that just before encoding.
pub fn resolve(
    original: Dimensions,
    aspect_ratio: AspectRatio,
    resolution: Resolution,
    fit_mode: FitMode,
) -> Dimensions {
    let base = resolution.dimensions().unwrap_or(original);
    match aspect_ratio.ratio() {
        None => fit_source_ratio(original.ratio(), base, fit_mode),
        Some(target_ratio) => fit_named_ratio(target_ratio, base, fit_mode),
    }
}

/// Rescale the base box so the source ratio survives.
///
/// cover grows the box past the base on one axis (the encoder crops the
/// overflow); contain shrinks it on one axis.
fn fit_source_ratio(source_ratio: f64, base: Dimensions, fit_mode: FitMode) -> Dimensions {
    let source_is_wider = source_ratio > base.ratio();
    match fit_mode {
        FitMode::Fill => base,
        FitMode::Cover => {
            if source_is_wider {
                keep_height(base.height, source_ratio)
            } else {
                keep_width(base.width, source_ratio)
            }
        }
        FitMode::Contain => {
            if source_is_wider {
                keep_width(base.width, source_ratio)
            } else {
                keep_height(base.height, source_ratio)
            }
        }
    }
}

/// Cut or extend the base box to the requested ratio.
///
/// cover picks the axis that keeps the result inside the base box; contain
/// picks the other one.
fn fit_named_ratio(target_ratio: f64, base: Dimensions, fit_mode: FitMode) -> Dimensions {
    let base_is_wider = base.ratio() > target_ratio;
    match fit_mode {
        FitMode::Fill => base,
        FitMode::Cover => {
            if base_is_wider {
                keep_height(base.height, target_ratio)
            } else {
                keep_width(base.width, target_ratio)
            }
        }
        FitMode::Contain => {
            if base_is_wider {
                keep_width(base.width, target_ratio)
            } else {
                keep_height(base.height, target_ratio)
            }
        }
    }
}

fn keep_height(height: u32, ratio: f64) -> Dimensions {
    Dimensions {
        width: (f64::from(height) * ratio) as u32,
        height,
    }
}

fn keep_width(width: u32, ratio: f64) -> Dimensions {
    Dimensions {
        width,
        height: (f64::from(width) / ratio) as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(width: u32, height: u32) -> Dimensions {
        Dimensions::new(width, height).unwrap()
    }

    #[test]
    fn fill_always_returns_the_base_box() {
        for ar in AspectRatio::ALL {
            assert_eq!(
                resolve(dims(123, 457), ar, Resolution::FullHd, FitMode::Fill),
                dims(1920, 1080)
            );
            assert_eq!(
                resolve(dims(123, 457), ar, Resolution::Original, FitMode::Fill),
                dims(123, 457)
            );
        }
    }

    #[test]
    fn original_ratio_matching_base_keeps_preset_box() {
        assert_eq!(
            resolve(
                dims(1920, 1080),
                AspectRatio::Original,
                Resolution::FullHd,
                FitMode::Cover
            ),
            dims(1920, 1080)
        );
        assert_eq!(
            resolve(
                dims(1920, 1080),
                AspectRatio::Original,
                Resolution::Uhd4k,
                FitMode::Cover
            ),
            dims(3840, 2160)
        );
    }

    #[test]
    fn original_ratio_cover_crops_never_pads() {
        // Panorama source: cover keeps the base height and overflows in width.
        let out = resolve(
            dims(3000, 1000),
            AspectRatio::Original,
            Resolution::FullHd,
            FitMode::Cover,
        );
        assert_eq!(out, dims(3240, 1080));
        assert!(out.width >= 1920 && out.height >= 1080);

        // Portrait source: cover keeps the base width and overflows in height.
        let out = resolve(
            dims(1000, 3000),
            AspectRatio::Original,
            Resolution::FullHd,
            FitMode::Cover,
        );
        assert_eq!(out, dims(1920, 5760));
        assert!(out.width >= 1920 && out.height >= 1080);
    }

    #[test]
    fn original_ratio_contain_fits_within_base() {
        let out = resolve(
            dims(3000, 1000),
            AspectRatio::Original,
            Resolution::FullHd,
            FitMode::Contain,
        );
        assert_eq!(out, dims(1920, 640));
        assert!(out.width <= 1920 && out.height <= 1080);

        let out = resolve(
            dims(1000, 3000),
            AspectRatio::Original,
            Resolution::FullHd,
            FitMode::Contain,
        );
        assert_eq!(out, dims(360, 1080));
        assert!(out.width <= 1920 && out.height <= 1080);
    }

    #[test]
    fn named_square_cover_is_width_constrained_on_wide_base() {
        assert_eq!(
            resolve(
                dims(3000, 1000),
                AspectRatio::Square,
                Resolution::FullHd,
                FitMode::Cover
            ),
            dims(1080, 1080)
        );
    }

    #[test]
    fn named_ratio_cover_vectors() {
        // 9:16 on a wide base keeps the base height.
        assert_eq!(
            resolve(
                dims(800, 600),
                AspectRatio::NineSixteen,
                Resolution::FullHd,
                FitMode::Cover
            ),
            dims(607, 1080)
        );
        // 21:9 is wider than the base, so the base width wins.
        assert_eq!(
            resolve(
                dims(800, 600),
                AspectRatio::TwentyOneNine,
                Resolution::FullHd,
                FitMode::Cover
            ),
            dims(1920, 822)
        );
        // 2.35:1 likewise.
        assert_eq!(
            resolve(
                dims(800, 600),
                AspectRatio::CinemaScope,
                Resolution::FullHd,
                FitMode::Cover
            ),
            dims(1920, 817)
        );
    }

    #[test]
    fn named_ratio_contain_vectors() {
        // Base ratio equals the request: the preset box survives unchanged.
        assert_eq!(
            resolve(
                dims(800, 600),
                AspectRatio::SixteenNine,
                Resolution::Hd720,
                FitMode::Contain
            ),
            dims(1280, 720)
        );
        // 21:9 wider than base: contain extends the height axis.
        assert_eq!(
            resolve(
                dims(800, 600),
                AspectRatio::TwentyOneNine,
                Resolution::FullHd,
                FitMode::Contain
            ),
            dims(2520, 1080)
        );
    }

    #[test]
    fn named_ratio_applies_to_original_resolution_base() {
        // 16:9 cut out of a 4:3 source box.
        assert_eq!(
            resolve(
                dims(800, 600),
                AspectRatio::SixteenNine,
                Resolution::Original,
                FitMode::Cover
            ),
            dims(800, 450)
        );
    }

    #[test]
    fn resolve_is_idempotent_for_identical_inputs() {
        let a = resolve(
            dims(1234, 777),
            AspectRatio::ThreeTwo,
            Resolution::Qhd,
            FitMode::Contain,
        );
        let b = resolve(
            dims(1234, 777),
            AspectRatio::ThreeTwo,
            Resolution::Qhd,
            FitMode::Contain,
        );
        assert_eq!(a, b);
    }
}
