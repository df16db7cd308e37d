//! Media type and media source menus.

use super::Emitter;
use super::localize::Label;
use crate::ir::{Op, Value};

impl Emitter<'_> {
    pub(super) fn emit_media_type(&mut self) {
        self.emit_media_menu("MediaType", "Media Type", "MediaType");
    }

    pub(super) fn emit_input_slot(&mut self) {
        self.emit_media_menu("InputSlot", "Media Source", "MediaClass");
    }

    /// A dropdown whose options select `page_device_key` by name.
    fn emit_media_menu(&mut self, keyword: &str, title: &str, page_device_key: &str) {
        let Some(desc) = self.source.describe(keyword).filter(|d| d.is_usable_list()) else {
            return;
        };
        let default = desc.default_str().unwrap_or_default();

        if desc.is_color_option() {
            self.push(Op::ColorKeyword(keyword.to_string()));
        }
        self.begin_ui(keyword, Label::message(title), Some("dropdown"), 10);
        self.metadata(&desc);
        self.push(Op::default(keyword, default));
        for choice in desc.choices() {
            let code = format!("<</{}({})>>setpagedevice", page_device_key, choice.name);
            self.param_option(
                &desc,
                keyword,
                &choice.name,
                Label::message(&choice.text),
                Value::Code(code),
                choice.name == default,
            );
        }
        self.close_ui(keyword);
    }
}
