use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("browser global `{0}` is unavailable")]
    MissingGlobal(&'static str),
    #[error("canvas element is not mounted")]
    CanvasNotMounted,
    #[error("2d rendering context is unavailable")]
    NoRenderingContext,
    #[error("javascript error: {0}")]
    Js(String),
    #[error("config is not valid json: {0}")]
    ConfigParse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl From<JsValue> for GameError {
    fn from(value: JsValue) -> Self {
        GameError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
