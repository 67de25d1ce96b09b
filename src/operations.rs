//! One method per AT command, shared by the blocking and the async adapter
//!
//! Expands inside an `impl` block which provides `send_command()` and an `Error` type
//! parametrized by the serial error.

macro_rules! command_operations {
    () => {
        command_operations!(@emit [blocking]);
    };
    (async) => {
        command_operations!(@emit [async]);
    };
    (@emit [$mode:tt]) => {
        command_operations! {
            @methods [$mode]

            /// Changes baud rate and framing of the module UART (`AT+UART=`)
            set_uart(baud_rate: u32, data_bits: u8, stop_bits: u8, parity: u8, flow_control: u8) =>
                $crate::commands::uart::UartConfigCommand::new(baud_rate, data_bits, stop_bits, parity, flow_control);
            /// `AT+UART?`
            query_uart() => $crate::commands::uart::UartConfigQuery;

            /// `AT+CWMODE?`
            query_mode() => $crate::commands::wifi::WifiModeQuery;
            /// Sets the WIFI mode (1: station, 2: soft AP, 3: both)
            set_mode(mode: u8) => $crate::commands::wifi::WifiModeCommand::new(mode);
            /// `AT+CWJAP?`
            query_ap() => $crate::commands::wifi::AccessPointQuery;
            /// Connects to an access point (`AT+CWJAP_CUR=`)
            connect_ap(ssid: &str, password: &str) =>
                $crate::commands::wifi::AccessPointConnectCommand::new(ssid, password)?;
            disconnect_ap() => $crate::commands::wifi::AccessPointDisconnectCommand;
            /// Lists the access points in range (`AT+CWLAP`)
            scan_ap() => $crate::commands::wifi::AccessPointScanCommand;
            /// Configures the soft access point (`AT+CWSAP=`)
            set_ap(ssid: &str, password: &str, channel: u8, encryption: u8) =>
                $crate::commands::wifi::SoftApConfigCommand::new(ssid, password, channel, encryption)?;
            query_ap_config() => $crate::commands::wifi::SoftApConfigQuery;
            /// Lists stations connected to the soft access point (`AT+CWLIF`)
            list_clients() => $crate::commands::wifi::ConnectedStationsCommand;

            /// `AT+CIFSR`
            query_ip() => $crate::commands::ip::ObtainLocalAddressCommand;
            query_ip_config() => $crate::commands::ip::StationIpQuery;
            /// Assigns a static station address (`AT+CIPSTA=`)
            set_static_ip(ip: &str, gateway: &str, netmask: &str) =>
                $crate::commands::ip::StaticIpCommand::new(ip, gateway, netmask)?;
            query_dhcp() => $crate::commands::ip::DhcpQuery;
            /// `AT+CWDHCP=<mode>,<en>`
            set_dhcp(mode: u8, enabled: u8) => $crate::commands::ip::DhcpCommand::new(mode, enabled);

            query_mux() => $crate::commands::tcp::MultipleConnectionsQuery;
            /// 0: single connection, 1: multiple connections
            set_mux(mode: u8) => $crate::commands::tcp::SetMultipleConnectionsCommand::new(mode);
            /// Opens a TCP connection in single connection mode
            start_tcp(remote_host: &str, port: u16) => $crate::commands::tcp::ConnectCommand::tcp(remote_host, port)?;
            /// Opens a UDP transmission in single connection mode
            start_udp(remote_host: &str, port: u16) => $crate::commands::tcp::ConnectCommand::udp(remote_host, port)?;
            /// Opens a connection on the given link, requires multiple connections mode
            start_id(link_id: u8, connection_type: &str, remote_host: &str, port: u16) =>
                $crate::commands::tcp::LinkConnectCommand::new(link_id, connection_type, remote_host, port)?;
            /// `AT+CIPSEND=<len>`
            send_len(length: u16) => $crate::commands::tcp::TransmissionPrepareCommand::new(length);
            /// `AT+CIPSEND=<id>,<len>`
            send_len_id(link_id: u8, length: u16) =>
                $crate::commands::tcp::LinkTransmissionPrepareCommand::new(link_id, length);
            close_conn() => $crate::commands::tcp::CloseCommand;
            close_conn_id(link_id: u8) => $crate::commands::tcp::CloseLinkCommand::new(link_id);
            /// `AT+CIPSTATUS`
            conn_status() => $crate::commands::tcp::ConnectionStatusCommand;
            set_recv_mode(mode: u8) => $crate::commands::tcp::SetSocketReceivingModeCommand::new(mode);
            /// `AT+CIPMODE=<mode>`
            set_mode_transparent(mode: u8) => $crate::commands::tcp::TransparentModeCommand::new(mode);

            /// Starts a TCP server on the given port (`AT+CIPSERVER=1,<port>`)
            enable_server(port: u16) => $crate::commands::server::EnableServerCommand::new(port);
            disable_server() => $crate::commands::server::DisableServerCommand::new();
            /// Server timeout in seconds
            server_timeout(seconds: u16) => $crate::commands::server::ServerTimeoutCommand::new(seconds);

            query_dns() => $crate::commands::dns::DnsConfigQuery;
            /// `AT+CDNSCFG="<primary>","<secondary>"`
            set_dns(primary: &str, secondary: &str) => $crate::commands::dns::DnsConfigCommand::new(primary, secondary)?;
            /// `AT+PING="<host>"`
            ping_host(host: &str) => $crate::commands::dns::PingCommand::new(host)?;

            /// 0: disabled, 1: light sleep, 2: modem sleep
            set_sleep(mode: u8) => $crate::commands::power::SleepModeCommand::new(mode);
            query_rf() => $crate::commands::power::RfPowerQuery;
            set_rf(level: u8) => $crate::commands::power::RfPowerCommand::new(level);

            /// `AT+RST`
            reset_module() => $crate::commands::system::RestartCommand;
            /// `AT+RESTORE`
            restore_factory() => $crate::commands::system::RestoreCommand;
            query_version() => $crate::commands::system::VersionQuery;
            query_ram() => $crate::commands::system::RamQuery;
            query_flash() => $crate::commands::system::FlashQuery;
            /// Starts a firmware upgrade through the network (`AT+CIUPDATE`)
            ota_update() => $crate::commands::system::FirmwareUpdateCommand;
            set_sys_msg(level: u8) => $crate::commands::system::SystemMessageCommand::new(level);

            start_smart_config() => $crate::commands::smart_config::SmartConfigStartCommand;
            stop_smart_config() => $crate::commands::smart_config::SmartConfigStopCommand;
        }
    };
    (@methods [blocking]
        $( $(#[$meta:meta])* $name:ident($($arg:ident: $ty:ty),*) => $command:expr; )*
    ) => {
        $(
            $(#[$meta])*
            pub fn $name(&mut self, $($arg: $ty),*) -> Result<(), Error<S::Error>> {
                let command = $command;
                self.send_command(&command)
            }
        )*
    };
    (@methods [async]
        $( $(#[$meta:meta])* $name:ident($($arg:ident: $ty:ty),*) => $command:expr; )*
    ) => {
        $(
            $(#[$meta])*
            pub async fn $name(&mut self, $($arg: $ty),*) -> Result<(), Error<S::Error>> {
                let command = $command;
                self.send_command(&command).await
            }
        )*
    };
}

pub(crate) use command_operations;
