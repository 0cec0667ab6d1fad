// src/ui/helpers.rs
use crate::avatar::decode_image;
use crate::model::Avatar;
use crate::view_models::VideoCard;
use egui::load::Bytes;
use egui::{Button, Frame, Image, RichText, Ui, Vec2};

pub fn big_list_button(ui: &mut Ui, label: impl Into<String>, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label.into()).min_size(Vec2::new(width, height)))
        .clicked()
}

/// Bytes decodificados del último avatar de imagen pintado.
/// Decodificar el base64 en cada frame sería tirar CPU.
#[derive(Default)]
pub struct AvatarCache {
    source: String,
    uri: String,
    bytes: Option<Bytes>,
    generation: u64,
}

impl AvatarCache {
    fn get(&mut self, avatar: &Avatar) -> Option<(String, Bytes)> {
        let Avatar::Image(url) = avatar else {
            return None;
        };
        if self.source != *url {
            self.source = url.clone();
            self.generation += 1;
            self.uri = format!("bytes://avatar-{}", self.generation);
            self.bytes = decode_image(avatar).map(Bytes::from);
        }
        self.bytes.clone().map(|b| (self.uri.clone(), b))
    }
}

/// Avatar cuadrado: emoji grande o la imagen subida
pub fn avatar_badge(ui: &mut Ui, cache: &mut AvatarCache, avatar: &Avatar, size: f32) {
    match cache.get(avatar) {
        Some((uri, bytes)) => {
            ui.add(Image::from_bytes(uri, bytes).fit_to_exact_size(Vec2::splat(size)));
        }
        None if avatar.is_image() => {
            ui.label(RichText::new("🖼").size(size * 0.8));
        }
        None => {
            ui.label(RichText::new(avatar.as_str()).size(size * 0.8));
        }
    }
}

/// Rejilla de emojis; devuelve el elegido si se pulsa alguno
pub fn emoji_picker(ui: &mut Ui, avatars: &[String], selected: &Avatar) -> Option<Avatar> {
    let mut picked = None;
    ui.horizontal_wrapped(|ui| {
        for emoji in avatars {
            let is_selected = matches!(selected, Avatar::Emoji(e) if e == emoji);
            let btn = Button::new(RichText::new(emoji).size(28.0))
                .selected(is_selected)
                .min_size(Vec2::splat(48.0));
            if ui.add(btn).clicked() {
                picked = Some(Avatar::Emoji(emoji.clone()));
            }
        }
    });
    picked
}

/// Tarjeta de vídeo clicable; devuelve true si se pulsa
pub fn video_card(ui: &mut Ui, card: &VideoCard, width: f32) -> bool {
    let mut clicked = false;
    Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(width);
        ui.vertical(|ui| {
            clicked = ui
                .add(Button::new(RichText::new(card.label()).strong()).frame(false))
                .clicked();
            ui.label(RichText::new(card.subtitle()).small());
            if card.has_quiz {
                ui.label(RichText::new("📝 Quiz available").small());
            }
        });
    });
    clicked
}

/// Lista de tarjetas; devuelve el id pulsado
pub fn video_list(ui: &mut Ui, cards: &[VideoCard], width: f32) -> Option<String> {
    let mut picked = None;
    for card in cards {
        if video_card(ui, card, width) {
            picked = Some(card.id.clone());
        }
        ui.add_space(6.0);
    }
    picked
}
