use serde::Deserialize;
use serde_aux::field_attributes::{deserialize_bool_from_anything, deserialize_number_from_string};

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub browser: BrowserSettings,
    #[serde(default)]
    pub sources: SourceSettings,
}

#[derive(Deserialize, Clone, Debug)]
pub struct BrowserSettings {
    pub webdriver_url: String,
    #[serde(deserialize_with = "deserialize_bool_from_anything")]
    pub headless: bool,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct SourceSettings {
    pub news_url: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub news_wait_millis: u64,
    pub featured_image_url: String,
    pub featured_image_base: String,
    pub facts_url: String,
    pub hemispheres_url: String,
    pub hemispheres_base: String,
}

impl Default for SourceSettings {
    fn default() -> Self {
        SourceSettings {
            news_url: "https://data-class-mars.s3.amazonaws.com/Mars/index.html".to_string(),
            news_wait_millis: 1000,
            featured_image_url: "https://data-class-jpl-space.s3.amazonaws.com/JPL_Space/index.html"
                .to_string(),
            featured_image_base: "https://data-class-jpl-space.s3.amazonaws.com/JPL_Space/"
                .to_string(),
            facts_url: "https://data-class-mars-facts.s3.amazonaws.com/Mars_Facts/index.html"
                .to_string(),
            hemispheres_url:
                "https://astrogeology.usgs.gov/search/results?q=hemisphere+enhanced&k1=target&v1=Mars"
                    .to_string(),
            hemispheres_base: "https://astrogeology.usgs.gov/".to_string(),
        }
    }
}

pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir()
        .map_err(|e| config::ConfigError::Message(format!("No current directory: {}", e)))?;
    let configuration_directory = base_path.join("configuration");

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;
    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(
            config::File::from(configuration_directory.join(environment_filename)).required(false),
        )
        // APP_BROWSER__WEBDRIVER_URL=http://chrome:4444 sets `Settings.browser.webdriver_url`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
