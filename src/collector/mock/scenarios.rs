//! Pre-built device scenarios for testing.
//!
//! These provide realistic pseudo-file trees and host answers for
//! handsets, emulators and compromised devices.

use super::filesystem::MockFs;
use super::host::MockHost;
use crate::collector::host::{FsSpace, NetInterface, Uname};

const HANDSET_BUILD_PROP: &str = "\
# begin common build properties
ro.build.id=TP1A.220905.001
ro.build.display.id=IN2013_13.1.0.580(EX01)
ro.build.version.incremental=R.1234567
ro.build.version.sdk=33
ro.build.version.preview_sdk=0
ro.build.version.codename=REL
ro.build.version.release=13
ro.build.version.security_patch=2024-05-01
ro.build.type=user
ro.build.user=root
ro.build.host=dg02-pool03-kvm97
ro.build.tags=release-keys
ro.build.fingerprint=OnePlus/OnePlus8_EEA/OnePlus8:13/TP1A.220905.001/R.1234567:user/release-keys
ro.product.brand=OnePlus
ro.product.name=OnePlus8_EEA
ro.product.device=OnePlus8
ro.product.board=kona
ro.product.manufacturer=OnePlus
ro.product.model=IN2013
ro.product.cpu.abi=arm64-v8a
ro.product.cpu.abilist=arm64-v8a,armeabi-v7a,armeabi
ro.product.cpu.abilist32=armeabi-v7a,armeabi
ro.product.cpu.abilist64=arm64-v8a
ro.bootloader=unknown
ro.hardware=qcom
ro.crypto.state=encrypted
";

const HANDSET_CPUINFO: &str = "\
processor\t: 0
BogoMIPS\t: 38.40
Features\t: fp asimd evtstrm aes pmull sha1 sha2 crc32 atomics fphp asimdhp cpuid asimdrdm lrcpc dcpop asimddp
CPU implementer\t: 0x51
CPU architecture: 8
CPU part\t: 0x805

processor\t: 1
BogoMIPS\t: 38.40
processor\t: 2
BogoMIPS\t: 38.40
processor\t: 3
BogoMIPS\t: 38.40
processor\t: 4
BogoMIPS\t: 38.40
CPU part\t: 0x804
processor\t: 5
BogoMIPS\t: 38.40
processor\t: 6
BogoMIPS\t: 38.40
processor\t: 7
BogoMIPS\t: 38.40

Hardware\t: Qualcomm Technologies, Inc SM8250
";

const EMULATOR_BUILD_PROP: &str = "\
ro.build.id=RSR1.201013.001
ro.build.version.sdk=30
ro.build.version.release=11
ro.build.type=userdebug
ro.build.tags=dev-keys
ro.build.fingerprint=generic/sdk_gphone_x86/generic_x86:11/RSR1.201013.001/6903271:userdebug/dev-keys
ro.product.brand=generic
ro.product.name=sdk_gphone_x86
ro.product.device=generic_x86
ro.product.manufacturer=Google
ro.product.model=Android SDK built for x86
ro.product.cpu.abilist=x86,armeabi-v7a,armeabi
ro.hardware=ranchu
";

const EMULATOR_CPUINFO: &str = "\
processor\t: 0
vendor_id\t: GenuineIntel
model name\t: Intel(R) Core(TM) i7-10750H CPU @ 2.60GHz
cpu MHz\t\t: 2591.998
flags\t\t: fpu vme de pse tsc msr pae mce cx8 apic sep mtrr pge mca cmov

processor\t: 1
vendor_id\t: GenuineIntel
model name\t: Intel(R) Core(TM) i7-10750H CPU @ 2.60GHz
cpu MHz\t\t: 2591.998
";

impl MockFs {
    /// A typical Android handset with readable pseudo-files.
    pub fn android_handset() -> Self {
        let mut fs = Self::new();

        fs.add_file(
            "/proc/meminfo",
            "\
MemTotal:        7819456 kB
MemFree:          301204 kB
MemAvailable:    3145728 kB
Buffers:            4180 kB
Cached:          2914936 kB
",
        );
        fs.add_file("/proc/cpuinfo", HANDSET_CPUINFO);
        fs.add_dir("/proc/1");
        fs.add_dir("/proc/812");
        fs.add_dir("/proc/4021");
        fs.add_dir("/proc/self");

        fs.add_file("/system/build.prop", HANDSET_BUILD_PROP);
        fs.add_file("/vendor/build.prop", "ro.product.model=vendor-model\n");

        fs.add_file(
            "/system/etc/permissions/platform.xml",
            r#"<permissions>
    <feature name="android.hardware.camera" />
    <feature name="android.hardware.wifi" />
    <unavailable-feature name="android.hardware.nfc" />
</permissions>
"#,
        );
        fs.add_file(
            "/vendor/etc/permissions/android.hardware.telephony.gsm.xml",
            r#"<permissions><feature name="android.hardware.telephony.gsm" /></permissions>"#,
        );
        fs.add_file(
            "/system/etc/permissions/README",
            r#"<feature name="platform.readme" />"#,
        );

        fs.add_file("/sys/class/power_supply/battery/capacity", "76\n");
        fs.add_file("/sys/class/power_supply/battery/status", "Charging\n");
        fs.add_file("/sys/class/power_supply/battery/temp", "295\n");
        fs.add_file("/sys/class/power_supply/battery/charge_full", "3680000\n");
        fs.add_file(
            "/sys/class/power_supply/battery/charge_full_design",
            "4000000\n",
        );
        fs.add_file("/sys/class/thermal/thermal_zone0/temp", "41200\n");

        fs
    }

    /// The stock Android emulator image.
    pub fn android_emulator() -> Self {
        let mut fs = Self::new();
        fs.add_file("/proc/meminfo", "MemTotal:        2048000 kB\n");
        fs.add_file("/proc/cpuinfo", EMULATOR_CPUINFO);
        fs.add_file("/system/build.prop", EMULATOR_BUILD_PROP);
        fs.add_file("/sys/class/power_supply/battery/capacity", "100\n");
        fs.add_file("/sys/class/power_supply/battery/status", "Not charging\n");
        fs
    }

    /// A handset with an su binary and Magisk installed.
    pub fn rooted_android() -> Self {
        let mut fs = Self::android_handset();
        fs.add_file("/system/xbin/su", "");
        fs.add_dir("/data/adb/magisk");
        fs
    }

    /// An iOS device: none of the pseudo-files exist.
    pub fn ios_device() -> Self {
        let mut fs = Self::new();
        fs.add_dir("/Applications");
        fs.add_dir("/var/mobile");
        fs
    }

    /// An iOS device with Cydia and MobileSubstrate installed.
    pub fn jailbroken_ios() -> Self {
        let mut fs = Self::ios_device();
        fs.add_dir("/Applications/Cydia.app");
        fs.add_file("/Library/MobileSubstrate/MobileSubstrate.dylib", "");
        fs.add_dir("/etc/apt");
        fs
    }
}

impl MockHost {
    /// Host answers matching `MockFs::android_handset`.
    pub fn android_handset() -> Self {
        let mut host = Self::new()
            .with_property("gsm.operator.alpha", "Vodafone,")
            .with_property("gsm.sim.operator.alpha", "Vodafone")
            .with_property("gsm.operator.isroaming", "false,false")
            .with_property("gsm.version.baseband", "MPSS.HI.2.0.c4-00165")
            .with_filesystem(
                "/data",
                FsSpace {
                    total: Some(118_000_000_000),
                    free: Some(61_000_000_000),
                },
            );
        host.physical_memory = Some(8_007_122_944);
        host.available_memory = Some(2_147_483_648);
        host.cpu_count = Some(8);
        host.uname = Some(Uname {
            sysname: "Linux".into(),
            nodename: "localhost".into(),
            release: "4.19.157-perf".into(),
            version: "#1 SMP PREEMPT".into(),
            machine: "aarch64".into(),
        });
        host.interfaces = Some(vec![
            NetInterface::new("lo", true),
            NetInterface::new("wlan0", true),
            NetInterface::new("rmnet_data0", true),
            NetInterface::new("dummy0", false),
        ]);
        host
    }

    /// A physical iPhone.
    pub fn iphone() -> Self {
        let mut host = Self::new()
            .with_property("kern.osproductversion", "17.4")
            .with_property("kern.osversion", "21E219")
            .with_filesystem(
                "/var/mobile",
                FsSpace {
                    total: Some(127_989_493_760),
                    free: Some(40_000_000_000),
                },
            );
        host.physical_memory = Some(6_000_000_000);
        host.available_memory = Some(1_500_000_000);
        host.cpu_count = Some(6);
        host.uname = Some(Uname {
            sysname: "Darwin".into(),
            nodename: "iPhone".into(),
            release: "23.4.0".into(),
            version: "Darwin Kernel Version 23.4.0".into(),
            machine: "iPhone14,2".into(),
        });
        host.interfaces = Some(vec![
            NetInterface::new("lo0", true),
            NetInterface::new("pdp_ip0", true),
            NetInterface::new("en0", false),
            NetInterface::new("utun0", true),
        ]);
        host.battery_level = Some(0.64);
        host.low_power_mode = Some(false);
        host
    }

    /// The same iPhone answers, built for the simulator.
    pub fn ios_simulator() -> Self {
        let mut host = Self::iphone();
        host.simulator = true;
        host
    }
}
