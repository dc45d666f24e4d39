use super::{
    bus::PolyBus,
    display::{DisplayPublisher, DisplaySink},
    shaper::Shaper,
};
use crate::{
    chain::Options,
    panel::{ControlMessage, MessageReceiver, PanelState},
};

/// The whole module as the audio thread sees it: panel, driver, and the two
/// lock-free channels to the UI.
///
/// Each tick drains pending control messages, derives options once, shapes
/// every group and offers a display snapshot. Nothing reachable from
/// [`tick`](Self::tick) or [`handle`](Self::handle) logs, locks or allocates.
pub struct PolyShaper<R, S> {
    panel: PanelState,
    shaper: Shaper,
    rx: R,
    display: DisplayPublisher<S>,
}

impl<R: MessageReceiver, S: DisplaySink> PolyShaper<R, S> {
    /// `display_interval` is the number of ticks between display snapshots.
    pub fn new(panel: PanelState, rx: R, sink: S, display_interval: u32) -> Self {
        Self {
            panel,
            shaper: Shaper::new(),
            rx,
            display: DisplayPublisher::new(sink, display_interval),
        }
    }

    /// One processing tick.
    pub fn tick(&mut self, input: &PolyBus, output: &mut PolyBus) -> Options {
        while let Some(msg) = self.rx.pop() {
            self.handle(msg);
        }

        let options = self.shaper.tick(&self.panel, input, output);

        let shaper = &self.shaper;
        self.display.offer(|| shaper.snapshot());
        options
    }

    /// Apply one control message.
    pub fn handle(&mut self, msg: ControlMessage) {
        match msg {
            ControlMessage::SetParam { id, value } => {
                self.panel.set_param(id, value);
            }
            ControlMessage::SetCv { input, volts } => self.panel.patch_cv(input, volts),
            ControlMessage::Unpatch { input } => self.panel.unpatch(input),
            ControlMessage::SetBypass(bypassed) => self.shaper.set_bypassed(bypassed),
            ControlMessage::Reset => {
                self.panel.reset();
                self.shaper.reset();
            }
        }
    }

    pub fn panel(&self) -> &PanelState {
        &self.panel
    }

    pub fn shaper(&self) -> &Shaper {
        &self.shaper
    }

    pub fn sink(&self) -> &S {
        self.display.sink()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        chain::Order,
        panel::{InputId, NoMessages, ParamId},
        poly::display::{DisplayFrame, NullDisplay},
    };
    use std::collections::VecDeque;

    impl MessageReceiver for VecDeque<ControlMessage> {
        fn pop(&mut self) -> Option<ControlMessage> {
            self.pop_front()
        }
    }

    #[derive(Default)]
    struct Frames(Vec<DisplayFrame>);

    impl DisplaySink for Frames {
        fn publish(&mut self, frame: DisplayFrame) {
            self.0.push(frame);
        }
    }

    #[test]
    fn messages_apply_before_processing() {
        let rx = VecDeque::from([
            ControlMessage::SetParam {
                id: ParamId::Order,
                value: 3.0,
            },
            ControlMessage::SetParam {
                id: ParamId::Attenuverter,
                value: -1.0,
            },
            ControlMessage::SetCv {
                input: InputId::OffsetCv,
                volts: 5.0,
            },
        ]);
        let mut module = PolyShaper::new(PanelState::new(), rx, NullDisplay, 1);
        let mut output = PolyBus::new();

        let opts = module.tick(&PolyBus::from_voltages(&[2.0]), &mut output);

        assert_eq!(opts.order, Order::Oacr);
        assert_eq!(output.voltages(), &[-7.0]);
    }

    #[test]
    fn reset_message_restores_defaults() {
        let rx = VecDeque::from([
            ControlMessage::SetParam {
                id: ParamId::Offset,
                value: 3.0,
            },
            ControlMessage::Reset,
        ]);
        let mut module = PolyShaper::new(PanelState::new(), rx, NullDisplay, 1);
        let mut output = PolyBus::new();

        let opts = module.tick(&PolyBus::from_voltages(&[1.0, 2.0]), &mut output);

        assert_eq!(opts, Options::default());
        assert_eq!(output.voltages(), &[1.0, 2.0]);
    }

    #[test]
    fn bypass_message() {
        let rx = VecDeque::from([ControlMessage::SetBypass(true)]);
        let mut panel = PanelState::new();
        panel.set_param(ParamId::Attenuverter, 0.0);
        let mut module = PolyShaper::new(panel, rx, NullDisplay, 1);
        let mut output = PolyBus::new();

        module.tick(&PolyBus::from_voltages(&[4.0]), &mut output);
        assert_eq!(output.voltages(), &[4.0]);
        assert!(module.shaper().is_bypassed());
    }

    #[test]
    fn snapshots_are_decimated() {
        let mut module = PolyShaper::new(PanelState::new(), NoMessages, Frames::default(), 3);
        let input = PolyBus::from_voltages(&[1.0, -1.0]);
        let mut output = PolyBus::new();

        for _ in 0..7 {
            module.tick(&input, &mut output);
        }

        let ticks: Vec<u64> = module.sink().0.iter().map(|f| f.tick).collect();
        assert_eq!(ticks, vec![1, 4, 7]);
        assert_eq!(module.sink().0[0].lights.channels, 2);
    }
}
