// src/controllers/osc.rs
// OSC Controller: remote live-tuning of the clock

use log::{info, warn};
use nannou_osc as osc;
use std::error::Error;

use crate::views::{MAX_FOV, MIN_FOV};

#[derive(Debug, Clone, PartialEq)]
pub enum OscCommand {
    SetTimezone { timezone: String },
    SetPeakY { value: f32 },
    SetPeakScale { value: f32 },
    SetPeakColor { r: f32, g: f32, b: f32 },
    SetBrightness { value: f32 },
    SetCameraPosition { x: f32, y: f32, z: f32 },
    SetCameraFov { fov: f32 },
    SetGroupRotation { x: f32, y: f32 },
}

pub struct OscController {
    command_queue: Vec<OscCommand>,
    receiver: osc::Receiver,
}

impl OscController {
    pub fn new(port: u16) -> Result<Self, Box<dyn Error>> {
        let receiver = osc::receiver(port)?;
        info!("Listening for OSC on port {}", port);

        Ok(Self {
            command_queue: Vec::new(),
            receiver,
        })
    }

    /// Drains everything received since the last frame without blocking.
    pub fn process_messages(&mut self) {
        for (packet, _addr) in self.receiver.try_iter() {
            for message in packet.into_msgs() {
                if let Some(command) = parse_message(&message) {
                    self.command_queue.push(command);
                }
            }
        }
    }

    pub fn take_commands(&mut self) -> Vec<OscCommand> {
        std::mem::take(&mut self.command_queue)
    }
}

pub fn parse_message(message: &osc::Message) -> Option<OscCommand> {
    let command = match (message.addr.as_str(), &message.args[..]) {
        ("/clock/timezone", [osc::Type::String(timezone)]) => Some(OscCommand::SetTimezone {
            timezone: timezone.clone(),
        }),
        ("/cube/peak_y", [osc::Type::Float(value)]) => {
            Some(OscCommand::SetPeakY { value: *value })
        }
        ("/cube/peak_scale", [osc::Type::Float(value)]) => {
            Some(OscCommand::SetPeakScale { value: *value })
        }
        ("/cube/color", [osc::Type::Float(r), osc::Type::Float(g), osc::Type::Float(b)]) => {
            Some(OscCommand::SetPeakColor {
                r: *r,
                g: *g,
                b: *b,
            })
        }
        ("/cube/brightness", [osc::Type::Float(value)]) if *value >= 0.0 => {
            Some(OscCommand::SetBrightness { value: *value })
        }
        ("/camera/position", [osc::Type::Float(x), osc::Type::Float(y), osc::Type::Float(z)]) => {
            Some(OscCommand::SetCameraPosition {
                x: *x,
                y: *y,
                z: *z,
            })
        }
        ("/camera/fov", [osc::Type::Float(fov)]) if (MIN_FOV..=MAX_FOV).contains(fov) => {
            Some(OscCommand::SetCameraFov { fov: *fov })
        }
        ("/group/rotation", [osc::Type::Float(x), osc::Type::Float(y)]) => {
            Some(OscCommand::SetGroupRotation { x: *x, y: *y })
        }
        _ => None,
    };

    if command.is_none() {
        warn!(
            "Ignoring OSC message {} with args {:?}",
            message.addr, message.args
        );
    }
    command
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(addr: &str, args: Vec<osc::Type>) -> osc::Message {
        osc::Message {
            addr: addr.to_string(),
            args,
        }
    }

    #[test]
    fn test_parse_timezone() {
        let parsed = parse_message(&message(
            "/clock/timezone",
            vec![osc::Type::String("Asia/Tokyo".to_string())],
        ));
        assert_eq!(
            parsed,
            Some(OscCommand::SetTimezone {
                timezone: "Asia/Tokyo".to_string()
            })
        );
    }

    #[test]
    fn test_parse_cube_params() {
        assert_eq!(
            parse_message(&message("/cube/peak_y", vec![osc::Type::Float(0.2)])),
            Some(OscCommand::SetPeakY { value: 0.2 })
        );
        assert_eq!(
            parse_message(&message(
                "/cube/color",
                vec![
                    osc::Type::Float(1.0),
                    osc::Type::Float(0.4),
                    osc::Type::Float(0.0)
                ]
            )),
            Some(OscCommand::SetPeakColor {
                r: 1.0,
                g: 0.4,
                b: 0.0
            })
        );
    }

    #[test]
    fn test_out_of_range_values_are_dropped() {
        assert_eq!(
            parse_message(&message("/cube/brightness", vec![osc::Type::Float(-1.0)])),
            None
        );
        assert_eq!(
            parse_message(&message("/camera/fov", vec![osc::Type::Float(150.0)])),
            None
        );
        assert_eq!(
            parse_message(&message("/camera/fov", vec![osc::Type::Float(60.0)])),
            Some(OscCommand::SetCameraFov { fov: 60.0 })
        );
    }

    #[test]
    fn test_malformed_messages_are_dropped() {
        assert_eq!(
            parse_message(&message("/cube/peak_y", vec![osc::Type::Int(1)])),
            None
        );
        assert_eq!(parse_message(&message("/grid/create", vec![])), None);
    }
}
