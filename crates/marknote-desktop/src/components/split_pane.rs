//! Horizontal split with a draggable gutter

use dioxus::prelude::*;

use marknote_core::layout::SplitLayout;

/// Two panes side by side. Dragging the gutter resizes them.
#[component]
pub fn SplitPane(left: Element, right: Element) -> Element {
    let mut layout = use_signal(SplitLayout::default);
    let mut dragging = use_signal(|| false);
    let mut container = use_signal(|| None::<std::rc::Rc<MountedData>>);

    let sidebar = layout().sidebar_percent();
    let editor = layout().editor_percent();

    let on_drag = move |evt: MouseEvent| async move {
        if !dragging() {
            return;
        }
        let Some(mounted) = container() else {
            return;
        };
        if let Ok(rect) = mounted.get_client_rect().await {
            let pointer_x = evt.client_coordinates().x - rect.origin.x;
            layout.set(layout().dragged_to(pointer_x, rect.size.width));
        }
    };

    rsx! {
        div {
            class: if dragging() { "split dragging" } else { "split" },
            onmounted: move |evt| container.set(Some(evt.data())),
            onmousemove: on_drag,
            onmouseup: move |_| dragging.set(false),
            onmouseleave: move |_| dragging.set(false),

            div {
                class: "split-pane",
                style: "width: calc({sidebar}% - 4px);",
                {left}
            }
            div {
                class: "gutter gutter-horizontal",
                onmousedown: move |evt| {
                    evt.prevent_default();
                    dragging.set(true);
                },
            }
            div {
                class: "split-pane",
                style: "width: calc({editor}% - 4px);",
                {right}
            }
        }
    }
}
