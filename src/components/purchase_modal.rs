use yew::prelude::*;

use crate::controller::ModalContent;

#[derive(Properties, PartialEq, Clone)]
pub struct PurchaseModalProps {
    pub content: Option<ModalContent>,
    pub on_close: Callback<()>,
}

#[function_component]
pub fn PurchaseModal(props: &PurchaseModalProps) -> Html {
    let backdrop = use_node_ref();

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    // Only clicks on the dimmed backdrop itself close the modal.
    let onclick = {
        let on_close = props.on_close.clone();
        let backdrop = backdrop.clone();
        Callback::from(move |e: MouseEvent| {
            let target = e.target_dyn_into::<web_sys::Element>();
            if target.is_some() && target == backdrop.cast::<web_sys::Element>() {
                on_close.emit(());
            }
        })
    };

    let visible = props.content.is_some();
    let content = props.content.clone().unwrap_or(ModalContent {
        key: String::new(),
        title: String::new(),
        description: String::new(),
        price: String::new(),
        confirm_href: "#".to_string(),
    });

    html! {
        <div
            id="purchaseModal"
            class="cyber-modal"
            ref={backdrop}
            style={if visible { "display: flex;" } else { "display: none;" }}
            role="dialog"
            aria-modal="true"
            aria-hidden={(!visible).to_string()}
            aria-labelledby="modalAppTitle"
            {onclick}
        >
            <div class="modal-content" data-app={content.key.clone()}>
                <button id="closeModal" class="modal-close" aria-label="Close" onclick={close.clone()}>
                    <i class="fa-solid fa-xmark"></i>
                </button>
                <div class="modal-header">
                    <i class="fa-solid fa-user-secret"></i>
                    <h3 id="modalAppTitle">{content.title.clone()}</h3>
                </div>
                <p id="modalAppDescription" class="modal-description">{content.description.clone()}</p>
                <div class="modal-price-row">
                    <span class="modal-price-label">{"Price"}</span>
                    <span id="modalPrice" class="modal-price">{content.price.clone()}</span>
                </div>
                <p class="modal-note">
                    {"Payment is arranged on Telegram. Your order details are filled in for you."}
                </p>
                <div class="modal-actions">
                    <button id="cancelPurchase" class="cyber-btn ghost" onclick={close}>
                        {"Cancel"}
                    </button>
                    <a
                        id="confirmPurchase"
                        class="cyber-btn primary"
                        href={content.confirm_href.clone()}
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        <i class="fa-brands fa-telegram"></i>
                        {" Confirm on Telegram"}
                    </a>
                </div>
            </div>
        </div>
    }
}
