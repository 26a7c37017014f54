use shared::theme::Theme;
use yew::prelude::*;

use crate::services::dom;

#[derive(Debug, Clone, PartialEq)]
struct Particle {
    x: f64,
    y: f64,
    delay: f64,
    duration: f64,
    icon: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct FloatingParticlesProps {
    pub theme: &'static Theme,
    pub count: usize,
}

/// Theme decorations drifting over the page background
#[function_component(FloatingParticles)]
pub fn floating_particles(props: &FloatingParticlesProps) -> Html {
    let theme = props.theme;
    let particles = use_memo(props.count, move |count| {
        (0..*count)
            .map(|_| Particle {
                x: dom::random() * 100.0,
                y: dom::random() * 100.0,
                delay: dom::random() * 10.0,
                duration: 15.0 + dom::random() * 10.0,
                icon: theme.decoration((dom::random() * theme.decorations.len() as f64) as usize),
            })
            .collect::<Vec<_>>()
    });

    html! {
        <div class="floating-particles" aria-hidden="true">
            { for particles.iter().map(|particle| {
                let style = format!(
                    "left: {:.2}%; top: {:.2}%; animation-delay: {:.2}s; animation-duration: {:.2}s;",
                    particle.x, particle.y, particle.delay, particle.duration
                );
                html! { <span class="floating-particle" {style}>{ particle.icon }</span> }
            }) }
        </div>
    }
}
