use log::{debug, info, warn};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::SubmissionTimings;
use crate::dom;
use crate::form::elements::{FormElements, SetupError, FORM_ID, SUCCESS_ID};
use crate::form::state::{InquiryAction, InquiryState};
use crate::form::submission;
use crate::form::validation::Field;
use crate::schedule::BrowserScheduler;

const SERVICES: [(&str, &str); 4] = [
    ("cleaning", "Cleaning Supplies"),
    ("maintenance", "Facility Maintenance"),
    ("equipment", "Equipment Hire"),
    ("other", "Something Else"),
];

fn render_field(state: &InquiryState, dispatcher: &UseReducerDispatcher<InquiryState>, field: Field) -> Html {
    let error = state.errors.get(field);
    let class = classes!("form-control", error.map(|_| "error"));
    let value = state.values.get(field).to_string();

    let onfocus = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |_: FocusEvent| dispatcher.dispatch(InquiryAction::Focus(field)))
    };

    let control = match field {
        Field::Message => {
            let oninput = {
                let dispatcher = dispatcher.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                    dispatcher.dispatch(InquiryAction::Input(field, input.value()));
                })
            };
            html! {
                <textarea id={field.id()} name={field.id()} rows="5" class={class} value={value} oninput={oninput} onfocus={onfocus} />
            }
        }
        _ => {
            // plain text for email; the shape check lives in validation
            let (input_type, input_mode) = match field {
                Field::Email => ("text", "email"),
                Field::Phone => ("tel", "tel"),
                _ => ("text", "text"),
            };
            let oninput = {
                let dispatcher = dispatcher.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    dispatcher.dispatch(InquiryAction::Input(field, input.value()));
                })
            };
            html! {
                <input type={input_type} inputmode={input_mode} id={field.id()} name={field.id()} class={class} value={value} oninput={oninput} onfocus={onfocus} />
            }
        }
    };

    html! {
        <div class="form-group">
            <label for={field.id()} class="form-label">{field.label()}</label>
            {control}
            <div id={field.error_id()} class={classes!("error-message", error.map(|_| "show"))}>
                {error.map(|e| e.message()).unwrap_or_default()}
            </div>
        </div>
    }
}

#[function_component(InquiryForm)]
pub fn inquiry_form() -> Html {
    let state = use_reducer(InquiryState::default);

    // Attach only once every required element is in the document.
    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                let located = dom::document()
                    .ok_or(SetupError::Unsupported("document"))
                    .and_then(|document| FormElements::locate(|id| document.get_element_by_id(id)));
                match located {
                    Ok(elements) => {
                        let _ = elements.form.set_attribute("novalidate", "");
                        for field in Field::ALL {
                            let _ = elements.field(field).set_attribute("aria-describedby", field.error_id());
                        }
                        let _ = elements.success.set_attribute("aria-live", "polite");
                        debug!("Inquiry form attached");
                        dispatcher.dispatch(InquiryAction::Attached);
                    }
                    Err(e) => warn!("Form validation: Some required form elements not found ({})", e),
                }
                || ()
            },
            (),
        );
    }

    // Each accepted attempt starts its own simulated submission.
    {
        let dispatcher = state.dispatcher();
        let values = state.values.clone();
        use_effect_with_deps(
            move |&(attempt, busy)| {
                if busy {
                    submission::start(
                        &BrowserScheduler,
                        SubmissionTimings::default(),
                        attempt,
                        &values,
                        move |action| dispatcher.dispatch(action),
                        || dom::scroll_into_view_centered(SUCCESS_ID),
                    );
                }
                || ()
            },
            (state.attempt, state.is_busy()),
        );
    }

    let onsubmit = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            dispatcher.dispatch(InquiryAction::Submit);
        })
    };

    let onchange_service = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let service = select.value();
            info!("Service selected: {}", service);
            dispatcher.dispatch(InquiryAction::SelectService(service));
        })
    };

    let dispatcher = state.dispatcher();
    let busy = state.is_busy();

    html! {
        <div class="contact__form-wrapper">
            <form id={FORM_ID} class="contact__form" onsubmit={onsubmit}>
                { render_field(&state, &dispatcher, Field::Name) }
                { render_field(&state, &dispatcher, Field::Email) }
                { render_field(&state, &dispatcher, Field::Phone) }

                <div class="form-group">
                    <label for="service" class="form-label">{"Service of Interest"}</label>
                    <select id="service" name="service" class="form-control" style="cursor: pointer;" onchange={onchange_service}>
                        <option value="" selected={state.values.service.is_empty()}>{"Select a service"}</option>
                        { for SERVICES.iter().map(|(value, label)| html! {
                            <option value={*value} selected={state.values.service == *value}>{*label}</option>
                        }) }
                    </select>
                </div>

                { render_field(&state, &dispatcher, Field::Message) }

                <button
                    type="submit"
                    class={classes!("btn", "btn--primary", busy.then_some("loading"))}
                    disabled={busy}
                >
                    {state.submit_label()}
                </button>
            </form>

            <div
                id={SUCCESS_ID}
                class={classes!("success-message", state.banner.is_shown().then_some("show"))}
                style={format!("display: {};", state.banner.display())}
            >
                <h3>{"Thank you for your inquiry!"}</h3>
                <p>{"We'll get back to you within one business day."}</p>
            </div>
        </div>
    }
}
