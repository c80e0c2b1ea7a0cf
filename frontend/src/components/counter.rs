use yew::prelude::*;
use yew_hooks::prelude::*;

pub const COUNTER_DURATION_MS: u32 = 2_000;
pub const FRAME_MS: u32 = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterFrame {
    Running(u32),
    Finished(u32),
}

/// Counts from zero to `target` in equal steps, one per frame.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterTicker {
    target: u32,
    increment: f64,
    current: f64,
}

impl CounterTicker {
    pub fn new(target: u32) -> Self {
        let frames = COUNTER_DURATION_MS as f64 / FRAME_MS as f64;
        Self {
            target,
            increment: target as f64 / frames,
            current: 0.0,
        }
    }

    pub fn tick(&mut self) -> CounterFrame {
        self.current += self.increment;
        if self.current < self.target as f64 {
            CounterFrame::Running(self.current.floor() as u32)
        } else {
            CounterFrame::Finished(self.target)
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ResultCounterProps {
    pub target: u32,
    /// Flips to true once; the count runs a single time.
    pub start: bool,
    #[prop_or_default]
    pub suffix: AttrValue,
}

#[function_component(ResultCounter)]
pub fn result_counter(props: &ResultCounterProps) -> Html {
    let shown = use_state(|| 0u32);
    let running = use_state(|| false);
    let ticker = use_mut_ref(|| CounterTicker::new(props.target));

    {
        let running = running.clone();
        use_effect_with_deps(
            move |start| {
                if *start {
                    running.set(true);
                }
                || ()
            },
            props.start,
        );
    }

    {
        let shown = shown.clone();
        let running_handle = running.clone();
        use_interval(
            move || match ticker.borrow_mut().tick() {
                CounterFrame::Running(value) => shown.set(value),
                CounterFrame::Finished(value) => {
                    shown.set(value);
                    running_handle.set(false);
                }
            },
            if *running { FRAME_MS } else { 0 },
        );
    }

    html! {
        <span class="result-number" data-target={props.target.to_string()}>
            {*shown}{props.suffix.as_str()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(target: u32) -> Vec<CounterFrame> {
        let mut ticker = CounterTicker::new(target);
        let mut frames = Vec::new();
        loop {
            let frame = ticker.tick();
            frames.push(frame);
            if let CounterFrame::Finished(_) = frame {
                return frames;
            }
        }
    }

    #[test]
    fn lands_exactly_on_target() {
        for target in [1, 35, 150, 1_000] {
            assert_eq!(run(target).last(), Some(&CounterFrame::Finished(target)));
        }
    }

    #[test]
    fn takes_about_two_seconds_of_frames() {
        let frames = run(150).len();
        assert!((124..=126).contains(&frames), "{frames}");
    }

    #[test]
    fn values_never_decrease() {
        let values: Vec<u32> = run(35)
            .into_iter()
            .map(|frame| match frame {
                CounterFrame::Running(v) | CounterFrame::Finished(v) => v,
            })
            .collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn zero_target_finishes_at_once() {
        assert_eq!(run(0), vec![CounterFrame::Finished(0)]);
    }
}
