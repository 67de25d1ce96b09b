//! Mocks for doc examples
use crate::config::PortConfig;
use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::convert::Infallible;
use embedded_io::{ErrorType, ReadReady};
use fugit::{TimerDurationU32, TimerInstantU32};
use fugit_timer::Timer;

/// Serial port mock, which answers a few commands like an ESP8266
#[derive(Default)]
pub struct ExampleSerial {
    /// Bytes of the line currently written
    line: Vec<u8>,

    /// Pending reply bytes
    rx: VecDeque<u8>,
}

impl ExampleSerial {
    fn handle_line(&mut self) {
        let reply: &[u8] = match self.line.as_slice() {
            b"AT+CWMODE=1\r\n" => b"OK\r\n",
            b"AT+CWJAP_CUR=\"test_wifi\",\"secret\"\r\n" => b"WIFI CONNECTED\r\nWIFI GOT IP\r\n\r\nOK\r\n",
            b"AT+CIPSTART=\"TCP\",\"10.0.0.1\",21\r\n" => b"CONNECT\r\n\r\nOK\r\n",
            b"AT+CIPSTATUS\r\n" => b"STATUS:3\r\n+CIPSTATUS:0,\"TCP\",\"10.0.0.1\",21,4200,0\r\n\r\nOK\r\n",
            b"AT+CIFSR\r\n" => b"+CIFSR:STAIP,\"10.0.0.181\"\r\n+CIFSR:STAMAC,\"10:fe:ed:05:ba:50\"\r\n\r\nOK\r\n",
            _ => b"OK\r\n",
        };

        self.rx.extend(reply);
        self.line.clear();
    }

    fn push(&mut self, data: &[u8]) {
        for byte in data {
            self.line.push(*byte);

            if self.line.ends_with(b"\r\n") {
                self.handle_line();
            }
        }
    }

    fn pop(&mut self, buf: &mut [u8]) -> usize {
        let mut count = 0;

        while count < buf.len() {
            match self.rx.pop_front() {
                Some(byte) => buf[count] = byte,
                None => break,
            }
            count += 1;
        }

        count
    }
}

impl ErrorType for ExampleSerial {
    type Error = Infallible;
}

impl embedded_io::Write for ExampleSerial {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.push(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl embedded_io::Read for ExampleSerial {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        Ok(self.pop(buf))
    }
}

impl ReadReady for ExampleSerial {
    fn read_ready(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.rx.is_empty())
    }
}

impl embedded_io_async::Write for ExampleSerial {
    async fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.push(buf);
        Ok(buf.len())
    }
}

impl embedded_io_async::Read for ExampleSerial {
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        Ok(self.pop(buf))
    }
}

impl crate::transport::Serial for ExampleSerial {
    fn configure(&mut self, _config: &PortConfig) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl crate::asynch::Serial for ExampleSerial {
    fn configure(&mut self, _config: &PortConfig) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Timer mock, expires immediately
#[derive(Default)]
pub struct ExampleTimer {}

impl Timer<1_000_000> for ExampleTimer {
    type Error = u32;

    fn now(&mut self) -> TimerInstantU32<1000000> {
        unimplemented!()
    }

    fn start(&mut self, _duration: TimerDurationU32<1000000>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn cancel(&mut self) -> Result<(), Self::Error> {
        unimplemented!()
    }

    fn wait(&mut self) -> nb::Result<(), Self::Error> {
        Ok(())
    }
}
