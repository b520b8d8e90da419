use yew::prelude::*;

use crate::widgets::avatar::{fallback_for, ImageContext, ImageFallback};

#[derive(Properties, PartialEq, Clone)]
pub struct FallbackImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: AttrValue,
    /// The image sits inside a `.bot-icon` container.
    #[prop_or_default]
    pub in_bot_icon: bool,
}

/// Image that swaps itself for a generated avatar when it fails to load.
#[function_component]
pub fn FallbackImage(props: &FallbackImageProps) -> Html {
    let fallback = use_state(|| None::<ImageFallback>);

    let onerror = {
        let fallback = fallback.clone();
        let props = props.clone();
        Callback::from(move |_: Event| {
            let current = (*fallback)
                .as_ref()
                .map(|f| f.src.clone())
                .unwrap_or_else(|| props.src.to_string());
            let context = ImageContext {
                src: &current,
                is_logo: props.class.split_whitespace().any(|c| c == "logo-img"),
                in_bot_icon: props.in_bot_icon,
            };
            if let Some(replacement) = fallback_for(context) {
                log::debug!("Image {} failed, using {}", current, replacement.src);
                fallback.set(Some(replacement));
            }
        })
    };

    let (src, style) = match &*fallback {
        Some(f) => (
            AttrValue::from(f.src.clone()),
            Some(format!("object-fit: {}; padding: {};", f.object_fit, f.padding)),
        ),
        None => (props.src.clone(), None),
    };

    html! {
        <img {src} alt={props.alt.clone()} class={props.class.to_string()} {style} {onerror} />
    }
}
