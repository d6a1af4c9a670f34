//! Plan summary with billing period, promo code and live total.

#[cfg(test)]
#[path = "pricing_summary_test.rs"]
mod pricing_summary_test;

use leptos::prelude::*;

use crate::state::checkout::CheckoutState;
use crate::util::format::format_currency;
use crate::util::pricing::BillingPeriod;

/// Label for a billing period option.
pub fn period_label(period: BillingPeriod) -> &'static str {
    match period {
        BillingPeriod::Monthly => "Mjesečno",
        BillingPeriod::Yearly => "Godišnje (2 mjeseca gratis)",
    }
}

/// Period after a radio for `radio` reports a change; unchecked radios keep `current`.
pub fn selected_period(current: BillingPeriod, radio: BillingPeriod, checked: bool) -> BillingPeriod {
    if checked { radio } else { current }
}

#[component]
pub fn PricingSummary(checkout: RwSignal<CheckoutState>) -> impl IntoView {
    let plan = move || checkout.with(|c| c.plan);
    let discounted = move || checkout.with(|c| c.price() != c.list_price());

    view! {
        <div class="pricing-summary rounded-lg border p-4">
            <input type="hidden" name="plan" prop:value=move || plan().name />
            <h3 class="font-semibold">{move || plan().name}</h3>
            <ul class="text-sm text-gray-600">
                {move || plan().features.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}
            </ul>
            <div class="flex gap-4 my-2">
                {[BillingPeriod::Monthly, BillingPeriod::Yearly]
                    .into_iter()
                    .map(|period| {
                        view! {
                            <label>
                                <input
                                    type="radio"
                                    name="billing_period"
                                    value=period.as_str()
                                    prop:checked=move || checkout.with(|c| c.period == period)
                                    on:change=move |ev| {
                                        let checked = event_target_checked(&ev);
                                        checkout.update(|c| c.period = selected_period(c.period, period, checked));
                                    }
                                />
                                {period_label(period)}
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
            <input
                type="text"
                id="promo_code"
                name="promo_code"
                placeholder="Promo kod"
                class="w-full px-4 py-2 border rounded-lg"
                prop:value=move || checkout.with(|c| c.promo_code.clone())
                on:input=move |ev| checkout.update(|c| c.promo_code = event_target_value(&ev))
            />
            <p class="text-xs mt-1">{move || checkout.with(CheckoutState::promo_status)}</p>
            <p class="text-lg font-bold mt-2">
                <Show when=discounted>
                    <span class="line-through text-gray-400 mr-2">
                        {move || format_currency(f64::from(checkout.with(CheckoutState::list_price)))}
                    </span>
                </Show>
                <span id="totalPrice">{move || format_currency(f64::from(checkout.with(CheckoutState::price)))}</span>
            </p>
        </div>
    }
}
