//! Image frame types, prompt building for generated visuals, and the
//! plain-text layout guidance sheet.

use serde::{Deserialize, Serialize};

/// Visual frame templates offered on the creative stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameType {
    /// A 情境寫實 — lifestyle scene.
    SceneRealistic,
    /// B 產品特寫 — product close-up.
    ProductCloseup,
    /// C 前後對比 — before/after comparison.
    BeforeAfter,
}

impl FrameType {
    pub fn label(&self) -> &'static str {
        match self {
            FrameType::SceneRealistic => "A 情境寫實",
            FrameType::ProductCloseup => "B 產品特寫",
            FrameType::BeforeAfter => "C 前後對比",
        }
    }

    /// Compact label used in the performance matrix.
    pub fn short_label(&self) -> &'static str {
        match self {
            FrameType::SceneRealistic => "A_情境",
            FrameType::ProductCloseup => "B_特寫",
            FrameType::BeforeAfter => "C_對比",
        }
    }

    fn scene_hint(&self) -> &'static str {
        match self {
            FrameType::SceneRealistic => "生活化場景，人物自然互動，品牌 Logo 右下",
            FrameType::ProductCloseup => "產品細節特寫，乾淨背景，Logo 右上",
            FrameType::BeforeAfter => "before/after 效果對比，強調改善幅度，Logo 置中偏下",
        }
    }

    pub fn all() -> &'static [FrameType] {
        &[
            FrameType::SceneRealistic,
            FrameType::ProductCloseup,
            FrameType::BeforeAfter,
        ]
    }
}

/// Builds the generation prompt for one (persona, frame, channel) cell.
pub fn build_image_prompt(persona: &str, frame: FrameType, channel: &str) -> String {
    format!(
        "{frame}／{channel} 視覺：以 {persona}，關鍵痛點：價格敏感/怕踩雷；情緒訴求與功能利益兼具；\
         畫面描述：{hint}；構圖留白可置入 12–16 字標題與 6–10 字 CTA；尺寸輸出 1:1、4:5、16:9。",
        frame = frame.label(),
        channel = channel,
        hint = frame.scene_hint(),
    )
}

/// The wireframe guidance sheet handed out alongside the copy export.
pub fn layout_spec_text<'a>(channels: impl IntoIterator<Item = &'a str>) -> String {
    let sizes = "1:1 / 4:5 / 16:9";
    let selected: Vec<&str> = channels.into_iter().collect();
    let selected = if selected.is_empty() {
        "（尚未選擇）".to_string()
    } else {
        selected.join(", ")
    };
    format!(
        "圖片版型規格（Wireframe 建議）\n\
         - A 情境寫實：標題<=14字、CTA<=8字、Logo 安全區右下；尺寸：{sizes}\n\
         - B 產品特寫：標題<=12字、CTA<=10字、Logo 安全區右上；尺寸：{sizes}\n\
         - C 前後對比：標題<=16字、CTA<=8字、Logo 安全區居中偏下；尺寸：{sizes}\n\
         \n本次選擇渠道/版位：{selected}\n"
    )
}
