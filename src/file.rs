use std::{fs, path::Path};
use log::info;
use ron::ser::PrettyConfig;
use serde::{Serialize, Deserialize};

use super::{
    error::*,
    palette::*,
    render::SwatchConfig,
};

fn default_rule() -> String {
    "monochromatic".to_string()
}

fn default_count() -> usize {
    5
}

/// The three inputs of [`generate_palette`], as read from a request file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteRequest {
    pub base: String,
    #[serde(default = "default_rule")]
    pub rule: String,
    #[serde(default = "default_count")]
    pub count: usize,
}

impl PaletteRequest {
    pub fn generate(&self) -> Palette {
        generate_palette(&self.base, &self.rule, self.count).into()
    }

    pub fn from_json(src: &str) -> serde_json::Result<PaletteRequest> {
        serde_json::from_str(src)
    }

    pub fn from_ron(src: &str) -> ron::error::SpannedResult<PaletteRequest> {
        ron::from_str(src)
    }

    pub fn from_yaml(src: &str) -> Result<PaletteRequest, serde_yaml::Error> {
        serde_yaml::from_str(src)
    }

    /// Checks `count` against the 1..=[`MAX_COLORS`] range the command line
    /// enforces. The base color and rule are left to the lenient generator.
    pub fn validate(&self) -> Result<(), HarmonyError> {
        if self.count == 0 || self.count > MAX_COLORS {
            return Err(HarmonyError::CountOutOfRange(self.count))
        }
        Ok(())
    }

    /// Reads and validates a request; the format follows the extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<PaletteRequest, HarmonyError> {
        let contents = fs::read_to_string(path.as_ref())?;
        let request = match extension(path.as_ref()).as_deref() {
            Some("json") => PaletteRequest::from_json(&contents)?,
            Some("ron") => PaletteRequest::from_ron(&contents)?,
            Some("yaml" | "yml") => PaletteRequest::from_yaml(&contents)?,
            _ => return Err(HarmonyError::ExtensionError)
        };
        request.validate()?;
        Ok(request)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Ron,
    Yaml,
    Css,
    Text,
    Image,
}

impl ExportFormat {
    pub fn from_path(path: impl AsRef<Path>) -> Result<ExportFormat, HarmonyError> {
        Ok(match extension(path.as_ref()).as_deref() {
            Some("json") => ExportFormat::Json,
            Some("ron") => ExportFormat::Ron,
            Some("yaml" | "yml") => ExportFormat::Yaml,
            Some("css") => ExportFormat::Css,
            Some("txt") => ExportFormat::Text,
            Some("png" | "jpg" | "jpeg") => ExportFormat::Image,
            _ => return Err(HarmonyError::ExtensionError)
        })
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()?.to_str().map(str::to_ascii_lowercase)
}

impl Palette {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_ron(&self) -> ron::Result<String> {
        ron::ser::to_string_pretty(self, PrettyConfig::default())
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (i, color) in self.iter().enumerate() {
            css.push_str(&format!("  --color-{}: {};\n", i + 1, color));
        }
        css.push_str("}\n");
        css
    }

    pub fn to_text(&self) -> String {
        self.iter().map(|color| format!("{}\n", color)).collect()
    }

    /// Writes the palette in the format implied by the file extension.
    pub fn save(&self, path: impl AsRef<Path>, swatch: SwatchConfig) -> Result<(), HarmonyError> {
        let path = path.as_ref();
        let format = ExportFormat::from_path(path)?;
        info!("exporting {} colors as {:?} to '{}'", self.len(), format, path.display());

        let contents = match format {
            ExportFormat::Json => self.to_json()?,
            ExportFormat::Ron => self.to_ron()?,
            ExportFormat::Yaml => self.to_yaml()?,
            ExportFormat::Css => self.to_css(),
            ExportFormat::Text => self.to_text(),
            ExportFormat::Image => {
                self.render_image(swatch)?.save(path)?;
                return Ok(())
            }
        };

        fs::write(path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Palette {
        Palette::new(vec!["#3B82F6".into(), "#F6AF3B".into()])
    }

    #[test]
    fn request_defaults() {
        let req = PaletteRequest::from_json(r##"{ "base": "#123456" }"##).unwrap();
        assert_eq!(req.rule, "monochromatic");
        assert_eq!(req.count, 5);
    }

    #[test]
    fn request_formats_agree() {
        let json = PaletteRequest::from_json(
            r##"{ "base": "#FF0000", "rule": "triadic", "count": 3 }"##).unwrap();
        let ron = PaletteRequest::from_ron(
            r##"(base: "#FF0000", rule: "triadic", count: 3)"##).unwrap();
        let yaml = PaletteRequest::from_yaml(
            "base: \"#FF0000\"\nrule: triadic\ncount: 3\n").unwrap();
        assert_eq!(json, ron);
        assert_eq!(json, yaml);
        assert_eq!(json.generate().colors(), ["#FF0000", "#00FF00", "#0000FF"]);
    }

    #[test]
    fn request_count_must_be_in_range() {
        let mut req = PaletteRequest::from_json(r##"{ "base": "#3B82F6", "count": 0 }"##).unwrap();
        assert!(matches!(req.validate(), Err(HarmonyError::CountOutOfRange(0))));

        req.count = MAX_COLORS + 1;
        assert!(matches!(req.validate(), Err(HarmonyError::CountOutOfRange(65))));

        req.count = MAX_COLORS;
        assert!(req.validate().is_ok());
        req.count = 1;
        assert!(req.validate().is_ok());
    }

    #[test]
    fn export_format_by_extension() {
        assert_eq!(ExportFormat::from_path("a.JSON").unwrap(), ExportFormat::Json);
        assert_eq!(ExportFormat::from_path("a.yml").unwrap(), ExportFormat::Yaml);
        assert_eq!(ExportFormat::from_path("a.jpeg").unwrap(), ExportFormat::Image);
        assert!(matches!(ExportFormat::from_path("a.bmp"), Err(HarmonyError::ExtensionError)));
        assert!(matches!(ExportFormat::from_path("palette"), Err(HarmonyError::ExtensionError)));
    }

    #[test]
    fn css_lists_custom_properties() {
        assert_eq!(
            sample().to_css(),
            ":root {\n  --color-1: #3B82F6;\n  --color-2: #F6AF3B;\n}\n"
        );
    }

    #[test]
    fn text_is_one_color_per_line() {
        assert_eq!(sample().to_text(), "#3B82F6\n#F6AF3B\n");
    }

    #[test]
    fn serialized_palette_is_a_plain_list() {
        let json: Vec<String> = serde_json::from_str(&sample().to_json().unwrap()).unwrap();
        assert_eq!(json, ["#3B82F6", "#F6AF3B"]);
        let ron: Vec<String> = ron::from_str(&sample().to_ron().unwrap()).unwrap();
        assert_eq!(ron, ["#3B82F6", "#F6AF3B"]);
        let yaml: Vec<String> = serde_yaml::from_str(&sample().to_yaml().unwrap()).unwrap();
        assert_eq!(yaml, ["#3B82F6", "#F6AF3B"]);
    }
}
