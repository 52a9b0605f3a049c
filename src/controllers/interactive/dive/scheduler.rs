use crate::controllers::interactive::data::render_request::RenderRequest;

/// Holds back frames while a dive outpaces the render worker.
///
/// A dive asks for a new frame every tick. Only one dive frame is in flight
/// at a time; anything asked for meanwhile replaces the held request, and
/// `flush` sends it once the in-flight frame has been delivered. A request
/// made outside a dive always goes straight out and drops whatever was held.
#[derive(Debug, Default)]
pub struct RenderScheduler {
    held: Option<RenderRequest>,
    in_flight: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerAction {
    Submitted { generation: u64 },
    Coalesced,
    NothingToDo,
}

impl RenderScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(
        &mut self,
        desired: RenderRequest,
        diving: bool,
        last_completed_gen: u64,
        submit: impl FnOnce(RenderRequest) -> u64,
    ) -> SchedulerAction {
        self.settle(last_completed_gen);

        if diving && self.in_flight.is_some() {
            self.held = Some(desired);
            return SchedulerAction::Coalesced;
        }

        self.held = None;
        self.dispatch(desired, submit)
    }

    /// Sends the held request once the in-flight frame has been delivered.
    pub fn flush(
        &mut self,
        last_completed_gen: u64,
        submit: impl FnOnce(RenderRequest) -> u64,
    ) -> SchedulerAction {
        self.settle(last_completed_gen);

        if self.held.is_none() {
            return SchedulerAction::NothingToDo;
        }
        if self.in_flight.is_some() {
            return SchedulerAction::Coalesced;
        }

        match self.held.take() {
            Some(request) => self.dispatch(request, submit),
            None => SchedulerAction::NothingToDo,
        }
    }

    #[must_use]
    pub fn is_waiting(&self) -> bool {
        self.held.is_some()
    }

    #[must_use]
    pub fn held_request(&self) -> Option<&RenderRequest> {
        self.held.as_ref()
    }

    fn settle(&mut self, last_completed_gen: u64) {
        if self
            .in_flight
            .is_some_and(|generation| last_completed_gen >= generation)
        {
            self.in_flight = None;
        }
    }

    fn dispatch(
        &mut self,
        request: RenderRequest,
        submit: impl FnOnce(RenderRequest) -> u64,
    ) -> SchedulerAction {
        let generation = submit(request);
        self.in_flight = Some(generation);

        SchedulerAction::Submitted { generation }
    }
}
