use crate::adapter::Error;
use crate::asynch::Adapter;
use crate::commands::tcp::CloseLinkCommand;
use crate::commands::ArgumentError;
use crate::config::PortConfig;
use crate::tests::mock::{MockSerial, MockSerialError};
use alloc::string::ToString;
use embassy_futures::block_on;
use std::time::{Duration, Instant};

type AdapterType = Adapter<MockSerial, 256, 64>;

fn adapter(serial: MockSerial) -> AdapterType {
    Adapter::new(serial, PortConfig::default()).unwrap()
}

#[test]
fn test_new_configures_serial_once() {
    let mut adapter = adapter(MockSerial::new());

    block_on(async {
        adapter.set_mode(3).await.unwrap();
        adapter.conn_status().await.unwrap();
    });

    assert_eq!(&[PortConfig::default()], adapter.serial.get_configurations());
}

#[test]
fn test_set_serial_pins() {
    let mut adapter = adapter(MockSerial::new());
    adapter.set_serial_pins(5, 6).unwrap();

    assert_eq!(&PortConfig::new(5, 6), adapter.config());
    assert_eq!(2, adapter.serial.get_configurations().len());
}

#[test]
fn test_operations() {
    let mut adapter = adapter(MockSerial::new());

    block_on(async {
        adapter.connect_ap("home", "secret").await.unwrap();
        adapter.start_id(1, "UDP", "192.168.1.5", 8080).await.unwrap();
        adapter.send_len_id(1, 4).await.unwrap();
        adapter.send_command(&CloseLinkCommand::new(1)).await.unwrap();
        adapter.send_at("AT+CIPMUX=0").await.unwrap();
    });

    let commands = adapter.serial.get_commands_as_strings();
    assert_eq!(5, commands.len());
    assert_eq!("AT+CWJAP_CUR=\"home\",\"secret\"\r\n".to_string(), commands[0]);
    assert_eq!("AT+CIPSTART=1,\"UDP\",\"192.168.1.5\",8080\r\n".to_string(), commands[1]);
    assert_eq!("AT+CIPSEND=1,4\r\n".to_string(), commands[2]);
    assert_eq!("AT+CIPCLOSE=1\r\n".to_string(), commands[3]);
    assert_eq!("AT+CIPMUX=0\r\n".to_string(), commands[4]);
}

#[test]
fn test_argument_error() {
    let mut adapter = adapter(MockSerial::new());
    let host = "h".repeat(65);

    let error = block_on(adapter.ping_host(host.as_str())).unwrap_err();

    assert_eq!(Error::Argument(ArgumentError::TooLong), error);
    assert!(adapter.serial.get_commands_as_strings().is_empty());
}

#[test]
fn test_write_error() {
    let mut serial = MockSerial::new();
    serial.fail_write(MockSerialError(2));
    let mut adapter = adapter(serial);

    let error = block_on(adapter.reset_module()).unwrap_err();

    assert_eq!(Error::Write(MockSerialError(2)), error);
}

#[test]
fn test_send_and_wait_pauses() {
    let mut serial = MockSerial::new();
    serial.add_reply(b"busy p...\r\n");
    let mut adapter = adapter(serial);

    let start = Instant::now();
    let response = block_on(adapter.send_and_wait("AT+CWJAP?", 30)).unwrap();

    assert!(start.elapsed() >= Duration::from_millis(30));
    assert_eq!(Ok("busy p...\r\n"), response.as_str());
    assert_eq!("AT+CWJAP?\r\n".to_string(), adapter.serial.get_commands_as_strings()[0]);
}

#[test]
fn test_send_command_and_wait() {
    let mut serial = MockSerial::new();
    serial.add_reply(b"+CIPMUX:1\r\nOK\r\n");
    let mut adapter = adapter(serial);

    let response =
        block_on(adapter.send_command_and_wait(&crate::commands::tcp::MultipleConnectionsQuery, 5)).unwrap();

    assert_eq!(Some("+CIPMUX:1"), response.lines().next());
}

#[test]
fn test_read_response() {
    let mut serial = MockSerial::new();
    serial.add_rx_data(&[b'B'; 80]);
    serial.set_read_chunk_size(10);
    let mut adapter = adapter(serial);

    let response = block_on(adapter.read_response()).unwrap();

    assert_eq!(64, response.len());
    assert_eq!(16, adapter.serial.get_remaining_rx());
}

#[test]
fn test_read_error() {
    let mut serial = MockSerial::new();
    serial.fail_read(MockSerialError(4));
    let mut adapter = adapter(serial);

    assert_eq!(Error::Read(MockSerialError(4)), block_on(adapter.read_response()).unwrap_err());
}

#[test]
fn test_command_too_long() {
    let mut adapter: Adapter<MockSerial, 8, 64> = Adapter::new(MockSerial::new(), PortConfig::default()).unwrap();

    assert_eq!(Error::CommandTooLong, block_on(adapter.set_mode(1)).unwrap_err());
}
