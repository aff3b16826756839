use leptos::html::Div;
use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::{
    application::ChartApplicationService,
    config::DashboardConfig,
    domain::{
        chart::{ChartBackend, ChartControls, PixelOffset},
        errors::{AppError, DashboardResult},
        logging::LogComponent,
        session::{Destination, StaticCredentials},
    },
    infrastructure::{BrowserTimeProvider, CsvPriceRepository, VegaEmbedBackend},
    log_error,
    presentation::SessionContext,
};

/// Element the chart backend draws into.
pub const CHART_CONTAINER_ID: &str = "chart-view";

/// Root component: login gate, then sidebar menu and the selected page.
#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    let session = SessionContext::new(Rc::new(StaticCredentials::default()));
    let controls = create_rw_signal(config.initial_controls());
    let service = Rc::new(RefCell::new(ChartApplicationService::new(
        &config,
        Box::new(CsvPriceRepository::bundled()),
        Box::new(BrowserTimeProvider::new()),
    )));
    let heading = config.page_title.clone();

    view! {
        <style>
            {r#"
            .dashboard-app {
                font-family: 'Source Sans Pro', -apple-system, BlinkMacSystemFont, sans-serif;
                display: flex;
                min-height: 100vh;
                color: #31333f;
            }

            .sidebar {
                width: 220px;
                padding: 24px 16px;
                background: #f0f2f6;
            }

            .menu-item {
                display: block;
                padding: 8px 12px;
                margin-bottom: 4px;
                border-radius: 6px;
                cursor: pointer;
            }

            .menu-item.active {
                background: #ff4b4b;
                color: white;
            }

            .page {
                flex: 1;
                max-width: 730px;
                margin: 0 auto;
                padding: 32px 16px;
            }

            .login-form {
                border: 1px solid #e6e9ef;
                border-radius: 8px;
                padding: 16px 24px;
            }

            .login-form label {
                display: block;
                margin: 12px 0;
            }

            .login-form input {
                display: block;
                width: 100%;
                padding: 6px;
            }

            .notice {
                background: #dff5e3;
                color: #177233;
                padding: 12px;
                border-radius: 6px;
            }

            .controls {
                display: grid;
                grid-template-columns: repeat(3, 1fr);
                gap: 16px;
                margin-bottom: 16px;
            }

            .status {
                color: #c0392b;
                font-size: 14px;
            }

            #chart-view {
                width: 100%;
            }
            "#}
        </style>
        <div class="dashboard-app">
            <Show when=move || session.is_authenticated()>
                <Sidebar session=session />
            </Show>
            <div class="page">
                <LoginForm session=session />
                <Show when=move || session.is_authenticated()>
                    {
                        let service = Rc::clone(&service);
                        let heading = heading.clone();
                        move || match session.destination.get() {
                            Destination::Home => view! { <HomePage /> }.into_view(),
                            Destination::Chart => view! {
                                <ChartPage
                                    heading=heading.clone()
                                    controls=controls
                                    service=Rc::clone(&service)
                                />
                            }
                            .into_view(),
                            Destination::LogOut => ().into_view(),
                        }
                    }
                </Show>
            </div>
        </div>
    }
}

/// Credential form while logged out; success notice right after login.
#[component]
fn LoginForm(session: SessionContext) -> impl IntoView {
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if session.attempt_login(&email.get_untracked(), &password.get_untracked()) {
            set_email.set(String::new());
            set_password.set(String::new());
        }
    };

    view! {
        <Show
            when=move || !session.is_authenticated()
            fallback=move || view! {
                <Show when=move || session.login_notice.get()>
                    <p class="notice">"Login successful"</p>
                </Show>
            }
        >
            <form class="login-form" on:submit=on_submit>
                <h4>"Enter your credentials"</h4>
                <label>
                    "Email"
                    <input
                        type="text"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit">"Login"</button>
            </form>
        </Show>
    }
}

#[component]
fn Sidebar(session: SessionContext) -> impl IntoView {
    view! {
        <nav class="sidebar">
            {Destination::menu()
                .into_iter()
                .map(|destination| {
                    view! {
                        <div
                            class="menu-item"
                            class:active=move || session.destination.get() == destination
                            on:click=move |_| session.select(destination)
                        >
                            {destination.to_string()}
                        </div>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! { <p>"This is home page"</p> }
}

/// Ticker and offset controls over the annotated price chart.
///
/// Every control change rebuilds the chart description and hands it to the
/// backend; the base layers come from the service's cache.
#[component]
fn ChartPage(
    heading: String,
    controls: RwSignal<ChartControls>,
    service: Rc<RefCell<ChartApplicationService>>,
) -> impl IntoView {
    let (status, set_status) = create_signal(String::new());
    let chart_ref = create_node_ref::<Div>();
    let backend = VegaEmbedBackend::new();

    create_effect(move |_| {
        let current = controls.get();
        if chart_ref.get().is_none() {
            return;
        }
        match render_chart(&service, &backend, &current) {
            Ok(()) => set_status.set(String::new()),
            Err(e) => {
                log_error!(LogComponent::Presentation("ChartPage"), "{}", e);
                set_status.set(e.to_string());
            }
        }
    });

    view! {
        <h1>{heading}</h1>
        <div class="controls">
            <label>
                "Choose a ticker (⬇💬👇ℹ️ ...)"
                <input
                    type="text"
                    prop:value=move || controls.with(|c| c.ticker.clone())
                    on:input=move |ev| controls.update(|c| c.ticker = event_target_value(&ev))
                />
            </label>
            <OffsetSlider
                label="Horizontal offset"
                value=Signal::derive(move || controls.with(|c| c.dx.value()))
                on_change=Callback::new(move |px: i32| controls.update(|c| c.dx = PixelOffset::new(px)))
            />
            <OffsetSlider
                label="Vertical offset"
                value=Signal::derive(move || controls.with(|c| c.dy.value()))
                on_change=Callback::new(move |px: i32| controls.update(|c| c.dy = PixelOffset::new(px)))
            />
        </div>
        <div class="status">{move || status.get()}</div>
        <div id=CHART_CONTAINER_ID node_ref=chart_ref></div>
    }
}

#[component]
fn OffsetSlider(label: &'static str, value: Signal<i32>, on_change: Callback<i32>) -> impl IntoView {
    view! {
        <label>
            {label} ": " {move || value.get()}
            <input
                type="range"
                min=PixelOffset::MIN.to_string()
                max=PixelOffset::MAX.to_string()
                step="1"
                prop:value=move || value.get().to_string()
                on:input=move |ev| {
                    if let Ok(px) = event_target_value(&ev).parse::<i32>() {
                        on_change.call(px);
                    }
                }
            />
        </label>
    }
}

fn render_chart(
    service: &RefCell<ChartApplicationService>,
    backend: &dyn ChartBackend,
    controls: &ChartControls,
) -> DashboardResult<()> {
    let chart = service
        .try_borrow_mut()
        .map_err(|_| AppError::Rendering("chart service is busy".to_string()))?
        .chart_for(controls)?;
    backend.render(CHART_CONTAINER_ID, &chart)
}
