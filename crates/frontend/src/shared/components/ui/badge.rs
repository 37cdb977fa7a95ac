use contracts::shared::enums::StatusTone;
use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor};

pub fn badge_color(tone: StatusTone) -> BadgeColor {
    match tone {
        StatusTone::Success => BadgeColor::Success,
        StatusTone::Warning => BadgeColor::Warning,
        StatusTone::Danger => BadgeColor::Danger,
        StatusTone::Informative => BadgeColor::Informative,
        StatusTone::Subtle => BadgeColor::Subtle,
    }
}

/// Status badge colored by the tone of an enum value
#[component]
pub fn ToneBadge(
    tone: StatusTone,
    #[prop(into)]
    label: String,
) -> impl IntoView {
    view! {
        <Badge appearance=BadgeAppearance::Tint color=badge_color(tone)>
            {label}
        </Badge>
    }
}
