use std::fmt;
use std::str::FromStr;

use crate::foundation::core::Dimensions;
use crate::foundation::error::KenBurnsError;

/// Target aspect ratio for the output clip.
///
/// `Original` preserves the source image's own ratio; every other variant is
/// a fixed ratio from the supported catalog. Names parse via [`FromStr`] and
/// an unrecognized name is an error, never ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "original")]
    Original,
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "4:3")]
    FourThree,
    #[serde(rename = "3:2")]
    ThreeTwo,
    #[serde(rename = "16:9")]
    SixteenNine,
    #[serde(rename = "9:16")]
    NineSixteen,
    #[serde(rename = "21:9")]
    TwentyOneNine,
    #[serde(rename = "2.35:1")]
    CinemaScope,
}

impl AspectRatio {
    /// width/height, or `None` for `Original`.
    pub fn ratio(self) -> Option<f64> {
        self.ratio_parts().map(|(w, h)| w / h)
    }

    fn ratio_parts(self) -> Option<(f64, f64)> {
        match self {
            Self::Original => None,
            Self::Square => Some((1.0, 1.0)),
            Self::FourThree => Some((4.0, 3.0)),
            Self::ThreeTwo => Some((3.0, 2.0)),
            Self::SixteenNine => Some((16.0, 9.0)),
            Self::NineSixteen => Some((9.0, 16.0)),
            Self::TwentyOneNine => Some((21.0, 9.0)),
            Self::CinemaScope => Some((2.35, 1.0)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Original => "original",
            Self::Square => "1:1",
            Self::FourThree => "4:3",
            Self::ThreeTwo => "3:2",
            Self::SixteenNine => "16:9",
            Self::NineSixteen => "9:16",
            Self::TwentyOneNine => "21:9",
            Self::CinemaScope => "2.35:1",
        }
    }

    pub const ALL: [AspectRatio; 8] = [
        Self::Original,
        Self::Square,
        Self::FourThree,
        Self::ThreeTwo,
        Self::SixteenNine,
        Self::NineSixteen,
        Self::TwentyOneNine,
        Self::CinemaScope,
    ];
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AspectRatio {
    type Err = KenBurnsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "original" => Ok(Self::Original),
            "1:1" => Ok(Self::Square),
            "4:3" => Ok(Self::FourThree),
            "3:2" => Ok(Self::ThreeTwo),
            "16:9" => Ok(Self::SixteenNine),
            "9:16" => Ok(Self::NineSixteen),
            "21:9" => Ok(Self::TwentyOneNine),
            "2.35:1" => Ok(Self::CinemaScope),
            other => Err(KenBurnsError::invalid_spec(format!(
                "unrecognized aspect ratio '{other}'"
            ))),
        }
    }
}

/// Target resolution preset.
///
/// `Original` uses the source image's own pixel box as the base.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Resolution {
    #[serde(rename = "original")]
    Original,
    #[serde(rename = "720p")]
    Hd720,
    #[default]
    #[serde(rename = "1080p")]
    FullHd,
    #[serde(rename = "1440p")]
    Qhd,
    #[serde(rename = "4k")]
    Uhd4k,
    #[serde(rename = "square")]
    Square,
}

impl Resolution {
    /// Pixel box for the preset, or `None` for `Original`.
    pub fn dimensions(self) -> Option<Dimensions> {
        let (width, height) = match self {
            Self::Original => return None,
            Self::Hd720 => (1280, 720),
            Self::FullHd => (1920, 1080),
            Self::Qhd => (2560, 1440),
            Self::Uhd4k => (3840, 2160),
            Self::Square => (1080, 1080),
        };
        Some(Dimensions { width, height })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Original => "original",
            Self::Hd720 => "720p",
            Self::FullHd => "1080p",
            Self::Qhd => "1440p",
            Self::Uhd4k => "4k",
            Self::Square => "square",
        }
    }

    pub const ALL: [Resolution; 6] = [
        Self::Original,
        Self::Hd720,
        Self::FullHd,
        Self::Qhd,
        Self::Uhd4k,
        Self::Square,
    ];
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Resolution {
    type Err = KenBurnsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "original" => Ok(Self::Original),
            "720p" => Ok(Self::Hd720),
            "1080p" => Ok(Self::FullHd),
            "1440p" => Ok(Self::Qhd),
            "4k" => Ok(Self::Uhd4k),
            "square" => Ok(Self::Square),
            other => Err(KenBurnsError::invalid_spec(format!(
                "unrecognized resolution '{other}'"
            ))),
        }
    }
}

/// How a source box is reconciled with the target box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitMode {
    /// Scale to fill the target box, cropping overflow.
    #[default]
    Cover,
    /// Scale to fit inside the target box, leaving padding implied.
    Contain,
    /// Stretch exactly to the target box, ignoring the source ratio.
    Fill,
}

impl FitMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cover => "cover",
            Self::Contain => "contain",
            Self::Fill => "fill",
        }
    }

    pub const ALL: [FitMode; 3] = [Self::Cover, Self::Contain, Self::Fill];
}

impl fmt::Display for FitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FitMode {
    type Err = KenBurnsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cover" => Ok(Self::Cover),
            "contain" => Ok(Self::Contain),
            "fill" => Ok(Self::Fill),
            other => Err(KenBurnsError::invalid_spec(format!(
                "unrecognized fit mode '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_fromstr() {
        for ar in AspectRatio::ALL {
            assert_eq!(ar.as_str().parse::<AspectRatio>().unwrap(), ar);
        }
        for res in Resolution::ALL {
            assert_eq!(res.as_str().parse::<Resolution>().unwrap(), res);
        }
        for fit in FitMode::ALL {
            assert_eq!(fit.as_str().parse::<FitMode>().unwrap(), fit);
        }
    }

    #[test]
    fn unrecognized_names_are_invalid_spec() {
        assert!(matches!(
            "17:9".parse::<AspectRatio>(),
            Err(KenBurnsError::InvalidSpec(_))
        ));
        assert!(matches!(
            "480p".parse::<Resolution>(),
            Err(KenBurnsError::InvalidSpec(_))
        ));
        assert!(matches!(
            "stretch".parse::<FitMode>(),
            Err(KenBurnsError::InvalidSpec(_))
        ));
    }

    #[test]
    fn serde_spellings_match_fromstr() {
        for ar in AspectRatio::ALL {
            let json = serde_json::to_string(&ar).unwrap();
            assert_eq!(json, format!("\"{}\"", ar.as_str()));
            assert_eq!(serde_json::from_str::<AspectRatio>(&json).unwrap(), ar);
        }
        for res in Resolution::ALL {
            let json = serde_json::to_string(&res).unwrap();
            assert_eq!(json, format!("\"{}\"", res.as_str()));
            assert_eq!(serde_json::from_str::<Resolution>(&json).unwrap(), res);
        }
        for fit in FitMode::ALL {
            let json = serde_json::to_string(&fit).unwrap();
            assert_eq!(json, format!("\"{}\"", fit.as_str()));
            assert_eq!(serde_json::from_str::<FitMode>(&json).unwrap(), fit);
        }
    }

    #[test]
    fn ratios_are_positive_and_sentinel_has_none() {
        assert!(AspectRatio::Original.ratio().is_none());
        for ar in AspectRatio::ALL {
            if let Some(r) = ar.ratio() {
                assert!(r > 0.0);
            }
        }
        assert!((AspectRatio::SixteenNine.ratio().unwrap() - 16.0 / 9.0).abs() < 1e-12);
        assert!((AspectRatio::CinemaScope.ratio().unwrap() - 2.35).abs() < 1e-12);
    }

    #[test]
    fn resolution_boxes_match_catalog() {
        assert!(Resolution::Original.dimensions().is_none());
        let d = Resolution::FullHd.dimensions().unwrap();
        assert_eq!((d.width, d.height), (1920, 1080));
        let d = Resolution::Uhd4k.dimensions().unwrap();
        assert_eq!((d.width, d.height), (3840, 2160));
        let d = Resolution::Square.dimensions().unwrap();
        assert_eq!((d.width, d.height), (1080, 1080));
    }

    #[test]
    fn defaults_match_conversion_defaults() {
        assert_eq!(AspectRatio::default(), AspectRatio::Original);
        assert_eq!(Resolution::default(), Resolution::FullHd);
        assert_eq!(FitMode::default(), FitMode::Cover);
    }
}
