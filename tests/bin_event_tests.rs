use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, TimeZone, Utc};

use chart_binning::api::{
    AxisDomainProvider, BIN_EVENT, BinEvent, BinParamsProvider, BinningChart, BinningConfig,
    BrushProvider, BrushSyncOutcome, FilterCollaborator, RenderCollaborator,
};
use chart_binning::core::{BrushExtent, Granularity};
use chart_binning::{ChartError, ChartResult};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Step {
    Bin(Granularity),
    RenderAsync,
    Replace,
    Commit,
    Redraw,
}

type Log = Rc<RefCell<Vec<Step>>>;

struct LoggingHost {
    extent: Option<BrushExtent>,
    log: Log,
}

impl BrushProvider for LoggingHost {
    fn extent(&self) -> Option<BrushExtent> {
        self.extent
    }
}

impl AxisDomainProvider for LoggingHost {
    fn min(&self) -> DateTime<Utc> {
        utc(2008, 1, 1, 0, 0, 0)
    }

    fn max(&self) -> DateTime<Utc> {
        utc(2008, 12, 31, 0, 0, 0)
    }
}

impl FilterCollaborator for LoggingHost {
    type Filter = ();

    fn construct_range_filter(
        &self,
        _lower: DateTime<Utc>,
        _upper: DateTime<Utc>,
    ) -> Self::Filter {
    }

    fn replace_filter(&mut self, _filter: Option<Self::Filter>) -> ChartResult<()> {
        self.log.borrow_mut().push(Step::Replace);
        Ok(())
    }

    fn commit_filter(&mut self) -> ChartResult<()> {
        self.log.borrow_mut().push(Step::Commit);
        Ok(())
    }
}

impl RenderCollaborator for LoggingHost {
    fn redraw_group(&mut self) -> ChartResult<()> {
        self.log.borrow_mut().push(Step::Redraw);
        Ok(())
    }

    fn render_async(&mut self) -> ChartResult<()> {
        self.log.borrow_mut().push(Step::RenderAsync);
        Ok(())
    }
}

impl BinParamsProvider for LoggingHost {}

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s)
        .single()
        .expect("valid utc")
}

fn chart_with_brush(extent: Option<BrushExtent>) -> (BinningChart<LoggingHost>, Log) {
    let log = Log::default();
    let host = LoggingHost {
        extent,
        log: Rc::clone(&log),
    };
    let chart =
        BinningChart::new("bin-chart", host, BinningConfig::default()).expect("chart init");
    (chart, log)
}

fn may_2008_brush() -> Option<BrushExtent> {
    Some(BrushExtent::new(
        utc(2008, 5, 21, 8, 59, 19),
        utc(2008, 5, 30, 20, 26, 35),
    ))
}

fn record_bins(chart: &mut BinningChart<LoggingHost>, log: &Log) -> Rc<RefCell<Vec<BinEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let events_sink = Rc::clone(&events);
    let log = Rc::clone(log);
    chart.on_bin(move |event| {
        log.borrow_mut().push(Step::Bin(event.granularity));
        events_sink.borrow_mut().push(event.clone());
    });
    events
}

#[test]
fn granularity_defaults_to_auto_and_setter_chains() {
    let (mut chart, log) = chart_with_brush(None);
    assert_eq!(chart.granularity(), Granularity::Auto);

    chart
        .set_granularity(Granularity::Quarter)
        .set_granularity(Granularity::Quarter);
    assert_eq!(chart.granularity(), Granularity::Quarter);
    assert_eq!(chart.state().selected_granularity, Granularity::Quarter);
    assert!(log.borrow().is_empty());
}

#[test]
fn change_emits_then_renders_then_rebins() {
    let (mut chart, log) = chart_with_brush(may_2008_brush());
    let events = record_bins(&mut chart, &log);

    let outcome = chart
        .change_granularity(Granularity::Day)
        .expect("change granularity");

    assert_eq!(chart.granularity(), Granularity::Day);
    assert_eq!(
        outcome,
        BrushSyncOutcome::Filtered {
            lower: utc(2008, 5, 21, 0, 0, 0),
            upper: utc(2008, 5, 31, 0, 0, 0),
        }
    );
    assert_eq!(
        *log.borrow(),
        vec![
            Step::Bin(Granularity::Day),
            Step::RenderAsync,
            Step::Replace,
            Step::Commit,
            Step::Redraw,
        ]
    );

    let events = events.borrow();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].granularity, Granularity::Day);
    assert_eq!(events[0].chart.chart_id, "bin-chart");
    assert_eq!(events[0].chart.previous_granularity, Granularity::Auto);
    assert_eq!(events[0].chart.selected_granularity, Granularity::Day);
}

#[test]
fn repeating_the_same_value_still_emits_each_time() {
    let (mut chart, log) = chart_with_brush(may_2008_brush());
    let events = record_bins(&mut chart, &log);

    chart.change_granularity(Granularity::Week).expect("first");
    chart.change_granularity(Granularity::Week).expect("second");

    let events = events.borrow();
    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|event| event.granularity == Granularity::Week));
    assert_eq!(events[1].chart.previous_granularity, Granularity::Week);
}

#[test]
fn change_before_any_brush_interaction_is_safe() {
    let (mut chart, log) = chart_with_brush(None);
    let events = record_bins(&mut chart, &log);

    let outcome = chart
        .change_granularity(Granularity::Month)
        .expect("change without brush");

    assert_eq!(outcome, BrushSyncOutcome::NoBrush);
    assert_eq!(events.borrow().len(), 1);
    assert_eq!(
        *log.borrow(),
        vec![Step::Bin(Granularity::Month), Step::RenderAsync]
    );
}

#[test]
fn unknown_picker_value_changes_nothing() {
    let (mut chart, log) = chart_with_brush(may_2008_brush());
    let events = record_bins(&mut chart, &log);

    let err = chart
        .change_granularity_by_name("fortnight")
        .expect_err("unknown bin must fail");

    assert!(matches!(err, ChartError::InvalidGranularity(_)));
    assert_eq!(chart.granularity(), Granularity::Auto);
    assert!(events.borrow().is_empty());
    assert!(log.borrow().is_empty());
}

#[test]
fn picker_value_is_parsed_by_name() {
    let (mut chart, log) = chart_with_brush(may_2008_brush());
    let events = record_bins(&mut chart, &log);

    chart
        .change_granularity_by_name("decade")
        .expect("known bin");
    assert_eq!(chart.granularity(), Granularity::Decade);
    assert_eq!(events.borrow()[0].granularity, Granularity::Decade);
}

#[test]
fn removed_listener_no_longer_observes_changes() {
    let (mut chart, _log) = chart_with_brush(None);
    let hits = Rc::new(RefCell::new(0_u32));
    let id = {
        let hits = Rc::clone(&hits);
        chart.on(BIN_EVENT, move |_| *hits.borrow_mut() += 1)
    };
    assert_eq!(chart.listener_count(BIN_EVENT), 1);

    chart.change_granularity(Granularity::Hour).expect("first");
    assert!(chart.off(BIN_EVENT, id));
    assert!(!chart.off(BIN_EVENT, id));
    chart.change_granularity(Granularity::Minute).expect("second");

    assert_eq!(*hits.borrow(), 1);
    assert_eq!(chart.listener_count(BIN_EVENT), 0);
}

#[test]
fn listeners_on_other_events_are_not_invoked() {
    let (mut chart, _log) = chart_with_brush(None);
    chart.on("filtered", |_| panic!("only bin events are emitted on change"));

    chart
        .change_granularity(Granularity::Year)
        .expect("change granularity");
}
