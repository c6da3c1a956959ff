use crate::core::colour_mapping::gradient::GradientColourMap;
use crate::core::colour_mapping::kinds::ColourSchemeKind;
use crate::core::colour_mapping::map::ColourMap;
use crate::core::colour_mapping::stops::stops_for;
use crate::core::errors::ConfigurationError;

#[must_use]
pub fn colour_map_factory(kind: ColourSchemeKind) -> Box<dyn ColourMap> {
    Box::new(GradientColourMap::new(kind, stops_for(kind)))
}

/// Looks a scheme up by name, as given on the command line or in config.
pub fn colour_map_by_name(name: &str) -> Result<Box<dyn ColourMap>, ConfigurationError> {
    Ok(colour_map_factory(name.parse::<ColourSchemeKind>()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;

    #[test]
    fn factory_returns_correct_display_names() {
        for &kind in ColourSchemeKind::ALL {
            let map = colour_map_factory(kind);
            assert_eq!(map.display_name(), kind.display_name());
            assert_eq!(map.kind(), kind);
        }
    }

    #[test]
    fn every_scheme_is_distinct() {
        let samples: Vec<Vec<Colour>> = ColourSchemeKind::ALL
            .iter()
            .map(|&kind| {
                let map = colour_map_factory(kind);
                [0.0, 0.3, 0.6, 1.0].iter().map(|&t| map.map(t)).collect()
            })
            .collect();

        for (i, a) in samples.iter().enumerate() {
            for b in samples.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn gray_runs_black_to_white() {
        let map = colour_map_factory(ColourSchemeKind::Gray);

        assert_eq!(map.map(0.0), Colour::BLACK);
        assert_eq!(map.map(1.0), Colour::WHITE);
    }

    #[test]
    fn lookup_by_name_rejects_unknown_names() {
        assert!(colour_map_by_name("viridis").is_ok());
        assert!(matches!(
            colour_map_by_name("nope"),
            Err(ConfigurationError::UnknownColourScheme { .. })
        ));
    }
}
