//! Serializable views of engine results, as printed by the CLI.

use lineviz::param::{AxisDescriptor, Frame, ParamEntry, ParamKind, Parametrization, Physical};
use lineviz::prelude::{DisplayValue, Point2};
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq)]
pub struct PointOut {
    pub x: f64,
    pub y: f64,
}

impl From<Point2> for PointOut {
    fn from(p: Point2) -> Self {
        Self { x: p.x, y: p.y }
    }
}

#[derive(Debug, Serialize)]
pub struct LabelOut {
    pub label: &'static str,
    pub value: String,
}

impl From<DisplayValue> for LabelOut {
    fn from(d: DisplayValue) -> Self {
        Self {
            label: d.label,
            value: d.value,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum PhysicalOut {
    Hough { theta: f64, rho: f64 },
    MidpointTheta { theta: f64, midpoint_px: f64 },
}

impl From<Physical> for PhysicalOut {
    fn from(p: Physical) -> Self {
        match p {
            Physical::Hough { theta, rho } => PhysicalOut::Hough { theta, rho },
            Physical::MidpointTheta { theta, midpoint_px } => {
                PhysicalOut::MidpointTheta { theta, midpoint_px }
            }
        }
    }
}

/// One evaluated frame; `endpoints` and `normal_foot` are `null` when absent.
#[derive(Debug, Serialize)]
pub struct FrameOut {
    pub param: &'static str,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub physical: PhysicalOut,
    pub endpoints: Option<[PointOut; 2]>,
    pub normal_foot: Option<PointOut>,
    pub display: [LabelOut; 2],
}

impl From<Frame> for FrameOut {
    fn from(f: Frame) -> Self {
        Self {
            param: f.kind.id(),
            x: f.param.x(),
            y: f.param.y(),
            width: f.viewport.width(),
            height: f.viewport.height(),
            physical: f.physical.into(),
            endpoints: f.endpoints.map(|s| [s.a.into(), s.b.into()]),
            normal_foot: f.normal_foot.map(Into::into),
            display: [f.display.primary.into(), f.display.secondary.into()],
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AxesOut {
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub x_range: [f64; 2],
    pub y_range: [f64; 2],
}

impl From<&AxisDescriptor> for AxesOut {
    fn from(a: &AxisDescriptor) -> Self {
        Self {
            x_label: a.x_label,
            y_label: a.y_label,
            x_range: a.x_range,
            y_range: a.y_range,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DescribeOut {
    pub id: &'static str,
    pub name: &'static str,
    pub overview: &'static str,
    pub parameters: &'static [&'static str],
    pub equations: &'static [&'static str],
    #[serde(skip_serializing_if = "no_notes")]
    pub notes: &'static [&'static str],
    pub axes: AxesOut,
}

impl From<ParamKind> for DescribeOut {
    fn from(kind: ParamKind) -> Self {
        let d = kind.description();
        Self {
            id: kind.id(),
            name: kind.name(),
            overview: d.overview,
            parameters: d.parameters,
            equations: d.equations,
            notes: d.notes,
            axes: kind.axes().into(),
        }
    }
}

fn no_notes(notes: &&'static [&'static str]) -> bool {
    notes.is_empty()
}

#[derive(Debug, Serialize)]
pub struct EntryOut {
    pub id: &'static str,
    pub name: &'static str,
}

impl From<ParamEntry> for EntryOut {
    fn from(e: ParamEntry) -> Self {
        Self {
            id: e.id,
            name: e.name,
        }
    }
}
