//! Landing page - Frontend Rust/Leptos Application
//!
//! A WebAssembly landing page whose hero banner carries a decorative
//! canvas of dots linking to the mouse cursor.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  LandingPage                                                 │
//! │  ├── Hero (copy, call to action, dot field canvas)          │
//! │  └── SectionTitle ("Latest news & articles")                │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (Size, Point, AppError, etc.)
//! - [`dots`] - Dot field animation and its drawing host
//! - [`components`] - UI components (Hero, SectionTitle, Footer)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod dots;
pub mod components;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Geometry
    Position, Size,
    // Dots
    Color, Point,
    // Errors
    AppError, AppResult,
};

// Dot field
pub use dots::{CanvasHost, DotField, DotFieldConfig, FieldEvent, WebCanvasHost};

// Components
pub use components::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install the panic hook and console logger, then mount [`App`].
pub fn run() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(LOG_LEVEL);

    log::info!("🦀 {} - Starting Leptos App", APP_NAME);

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=LandingPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn LandingPage() -> impl IntoView {
    view! {
        <Hero/>
        <SectionTitle title="Latest news & articles"/>
        <Footer/>
    }
}
