use hue::HUE_MAX_BRI;
use hue::clamp::{Clamp, bri_clamped, sat_clamped};
use hue::request::LightRequest;
use hue::state::{Alert, ColorMode};
use hue::update::LightUpdate;
use zcl::ZclCommand;
use zcl::cluster::colorctrl::ColorCtrlCommand;
use zcl::cluster::identify::{IdentifyCommand, IdentifyEffect};
use zcl::cluster::levelctrl::LevelCtrlCommand;
use zcl::cluster::onoff::OnOffCommand;

/// A command to send, and the state it establishes once it succeeds
#[derive(Clone, Debug, PartialEq)]
pub struct PlannedCommand {
    pub command: ZclCommand,
    pub effect: LightUpdate,
}

impl PlannedCommand {
    const fn new(command: ZclCommand, effect: LightUpdate) -> Self {
        Self { command, effect }
    }
}

/// Commands for on/off and brightness
fn synthesize_level(req: &LightRequest, transtime: u16) -> Option<PlannedCommand> {
    // brightness is meaningless when turning off
    let bri = if req.on == Some(false) { None } else { req.bri };

    if let Some(bri) = bri {
        let cmd = LevelCtrlCommand::MoveToLevelWithOnOff {
            level: bri_clamped(bri),
            transtime,
        };
        let effect = LightUpdate::new()
            .with_on(req.on.unwrap_or(bri > 0))
            .with_bri(bri);
        return Some(PlannedCommand::new(ZclCommand::LevelCtrl(cmd), effect));
    }

    if let Some(on) = req.on {
        let effect = LightUpdate::new().with_on(on);

        // a transition time can only be honored through the level cluster
        let cmd = if req.transitiontime.is_some() {
            ZclCommand::LevelCtrl(LevelCtrlCommand::MoveToLevelWithOnOff {
                level: if on { HUE_MAX_BRI } else { 0 },
                transtime,
            })
        } else {
            ZclCommand::OnOff(OnOffCommand::from_bool(on))
        };
        return Some(PlannedCommand::new(cmd, effect));
    }

    req.bri_inc.map(|inc| {
        let cmd = LevelCtrlCommand::Step {
            stepmode: u8::from(inc < 0),
            stepsize: u8::try_from(inc.unsigned_abs()).unwrap_or(u8::MAX),
            transtime,
        };
        PlannedCommand::new(ZclCommand::LevelCtrl(cmd), LightUpdate::new())
    })
}

/// Commands for color. Only one color model is applied per request, in order
/// of precedence: xy, xy_inc, ct, hue/sat.
fn synthesize_color(req: &LightRequest, transtime: u16) -> Option<PlannedCommand> {
    let color = |cmd, effect| Some(PlannedCommand::new(ZclCommand::ColorCtrl(cmd), effect));

    if let Some(xy) = req.xy {
        // stored xy stays within the unit square, like the values sent
        let xy = xy.map(|v| v.clamp(0.0, 1.0));
        return color(
            ColorCtrlCommand::MoveToColor {
                colorx: xy[0].unit_to_u16_clamped(),
                colory: xy[1].unit_to_u16_clamped(),
                transtime,
            },
            LightUpdate::new().with_xy(xy).with_colormode(ColorMode::Xy),
        );
    }

    if let Some(inc) = req.xy_inc {
        return color(
            ColorCtrlCommand::StepColor {
                stepx: inc[0].unit_to_i16_clamped(),
                stepy: inc[1].unit_to_i16_clamped(),
                transtime,
            },
            LightUpdate::new(),
        );
    }

    if let Some(ct) = req.ct {
        return color(
            ColorCtrlCommand::MoveToColorTemp {
                colortemp: ct,
                transtime,
            },
            LightUpdate::new().with_ct(ct).with_colormode(ColorMode::Ct),
        );
    }

    match (req.hue, req.sat) {
        (Some(hue), Some(sat)) => color(
            ColorCtrlCommand::EnhancedMoveToHueAndSaturation {
                enhancehue: hue,
                saturation: sat_clamped(sat),
                transtime,
            },
            LightUpdate::new()
                .with_hue(hue)
                .with_sat(sat)
                .with_colormode(ColorMode::Hs),
        ),
        (None, Some(sat)) => color(
            ColorCtrlCommand::MoveToSaturation {
                saturation: sat_clamped(sat),
                transtime,
            },
            LightUpdate::new().with_sat(sat).with_colormode(ColorMode::Hs),
        ),
        (Some(hue), None) => color(
            ColorCtrlCommand::EnhancedMoveToHue {
                enhancehue: hue,
                direction: 0,
                transtime,
            },
            LightUpdate::new().with_hue(hue).with_colormode(ColorMode::Hs),
        ),
        (None, None) => {
            if req.ct_inc.is_some() || req.hue_inc.is_some() || req.sat_inc.is_some() {
                log::debug!("Relative ct/hue/sat changes are not supported, ignoring");
            }
            None
        }
    }
}

fn synthesize_alert(req: &LightRequest) -> Option<PlannedCommand> {
    let alert = Alert::normalize(req.alert.as_ref()?);
    let effect = match alert {
        Alert::Select => IdentifyEffect::Blink,
        Alert::Lselect => IdentifyEffect::Breathe,
        Alert::None => IdentifyEffect::StopEffect,
    };

    Some(PlannedCommand::new(
        ZclCommand::Identify(IdentifyCommand::trigger(effect)),
        LightUpdate::new().with_alert(alert),
    ))
}

/// Translate a light request into the commands that realize it
///
/// At most one command is produced per axis (on/off and brightness, color,
/// alert). An empty result is valid.
#[must_use]
pub fn synthesize(req: &LightRequest) -> Vec<PlannedCommand> {
    let transtime = req.transitiontime.unwrap_or(0);

    if req.effect.is_some() {
        log::debug!("Light effects are not supported, ignoring {:?}", req.effect);
    }

    [
        synthesize_level(req, transtime),
        synthesize_color(req, transtime),
        synthesize_alert(req),
    ]
    .into_iter()
    .flatten()
    .collect()
}
