// HUD text helpers

pub fn score_label(caught: u32) -> String {
    format!("捕猎数: {}", caught)
}

pub fn fps_label(fps: f64) -> String {
    format!("fps: {}", fps.round())
}
