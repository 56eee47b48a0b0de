//! Loader handshake against a built driver library.

use std::ffi::CStr;
use std::path::Path;
use std::ptr;

use anyhow::{bail, Context};
use ash::vk;
use serde::Serialize;
use tracing::debug;

/// Interface version we ask for, the newest the driver knows.
const REQUESTED_INTERFACE_VERSION: u32 = 5;

type PfnNegotiate = unsafe extern "system" fn(*mut u32) -> vk::Result;

#[derive(Debug, Serialize)]
pub struct ProbeReport {
    pub library: String,
    pub interface_version: u32,
    pub instance_version: String,
    pub physical_devices: Vec<DeviceSummary>,
}

#[derive(Debug, Serialize)]
pub struct DeviceSummary {
    pub name: String,
    pub vendor_id: u32,
    pub device_id: u32,
    pub device_type: String,
    pub api_version: String,
    pub queue_families: Vec<QueueFamilySummary>,
}

#[derive(Debug, Serialize)]
pub struct QueueFamilySummary {
    pub flags: String,
    pub queue_count: u32,
}

impl ProbeReport {
    pub fn print_pretty(&self) {
        println!();
        println!("Driver: {}", self.library);
        println!("  Interface version: {}", self.interface_version);
        println!("  Instance version:  {}", self.instance_version);
        println!();
        for (i, device) in self.physical_devices.iter().enumerate() {
            println!("  GPU {}: {}", i, device.name);
            println!("    Type:     {}", device.device_type);
            println!("    Vendor:   {:#010x}", device.vendor_id);
            println!("    Device:   {:#010x}", device.device_id);
            println!("    API:      {}", device.api_version);
            for (f, family) in device.queue_families.iter().enumerate() {
                println!("    Queue family {}: {} x{}", f, family.flags, family.queue_count);
            }
            println!();
        }
    }
}

fn version_string(version: u32) -> String {
    format!(
        "{}.{}.{}",
        vk::api_version_major(version),
        vk::api_version_minor(version),
        vk::api_version_patch(version)
    )
}

/// Resolve `name` through the driver's `vk_icdGetInstanceProcAddr` and cast
/// it to the matching PFN type.
unsafe fn resolve<F: Copy>(
    gipa: vk::PFN_vkGetInstanceProcAddr,
    instance: vk::Instance,
    name: &CStr,
) -> anyhow::Result<F> {
    let Some(func) = gipa(instance, name.as_ptr()) else {
        bail!("driver does not export {}", name.to_string_lossy());
    };
    debug!("resolved {}", name.to_string_lossy());
    Ok(std::mem::transmute_copy::<unsafe extern "system" fn(), F>(&func))
}

fn check(result: vk::Result, what: &str) -> anyhow::Result<()> {
    if result != vk::Result::SUCCESS {
        bail!("{} failed: {:?}", what, result);
    }
    Ok(())
}

pub fn run_probe(path: &Path) -> anyhow::Result<ProbeReport> {
    let lib = unsafe { libloading::Library::new(path) }
        .with_context(|| format!("cannot load {}", path.display()))?;

    unsafe {
        let negotiate: libloading::Symbol<PfnNegotiate> = lib
            .get(b"vk_icdNegotiateLoaderICDInterfaceVersion\0")
            .context("missing vk_icdNegotiateLoaderICDInterfaceVersion")?;
        let mut interface_version = REQUESTED_INTERFACE_VERSION;
        check(negotiate(&mut interface_version), "interface negotiation")?;

        let gipa: libloading::Symbol<vk::PFN_vkGetInstanceProcAddr> = lib
            .get(b"vk_icdGetInstanceProcAddr\0")
            .context("missing vk_icdGetInstanceProcAddr")?;
        let gipa = *gipa;

        let enumerate_version: vk::PFN_vkEnumerateInstanceVersion =
            resolve(gipa, vk::Instance::null(), c"vkEnumerateInstanceVersion")?;
        let mut instance_version = vk::API_VERSION_1_0;
        check(enumerate_version(&mut instance_version), "vkEnumerateInstanceVersion")?;

        let create_instance: vk::PFN_vkCreateInstance =
            resolve(gipa, vk::Instance::null(), c"vkCreateInstance")?;
        let app = vk::ApplicationInfo::default()
            .application_name(c"vkmock probe")
            .api_version(vk::API_VERSION_1_1);
        let create_info = vk::InstanceCreateInfo::default().application_info(&app);
        let mut instance = vk::Instance::null();
        check(
            create_instance(&create_info, ptr::null(), &mut instance),
            "vkCreateInstance",
        )?;

        let destroy_instance: vk::PFN_vkDestroyInstance =
            resolve(gipa, instance, c"vkDestroyInstance")?;
        let devices = describe_devices(gipa, instance);
        destroy_instance(instance, ptr::null());

        Ok(ProbeReport {
            library: path.display().to_string(),
            interface_version,
            instance_version: version_string(instance_version),
            physical_devices: devices?,
        })
    }
}

unsafe fn describe_devices(
    gipa: vk::PFN_vkGetInstanceProcAddr,
    instance: vk::Instance,
) -> anyhow::Result<Vec<DeviceSummary>> {
    let enumerate_devices: vk::PFN_vkEnumeratePhysicalDevices =
        resolve(gipa, instance, c"vkEnumeratePhysicalDevices")?;
    let get_properties: vk::PFN_vkGetPhysicalDeviceProperties =
        resolve(gipa, instance, c"vkGetPhysicalDeviceProperties")?;
    let get_queue_families: vk::PFN_vkGetPhysicalDeviceQueueFamilyProperties =
        resolve(gipa, instance, c"vkGetPhysicalDeviceQueueFamilyProperties")?;

    let mut count = 0u32;
    check(
        enumerate_devices(instance, &mut count, ptr::null_mut()),
        "vkEnumeratePhysicalDevices",
    )?;
    let mut physical_devices = vec![vk::PhysicalDevice::null(); count as usize];
    check(
        enumerate_devices(instance, &mut count, physical_devices.as_mut_ptr()),
        "vkEnumeratePhysicalDevices",
    )?;
    physical_devices.truncate(count as usize);

    let mut summaries = Vec::with_capacity(physical_devices.len());
    for pd in physical_devices {
        let mut props = vk::PhysicalDeviceProperties::default();
        get_properties(pd, &mut props);

        let mut family_count = 0u32;
        get_queue_families(pd, &mut family_count, ptr::null_mut());
        let mut families = vec![vk::QueueFamilyProperties::default(); family_count as usize];
        get_queue_families(pd, &mut family_count, families.as_mut_ptr());
        families.truncate(family_count as usize);

        summaries.push(DeviceSummary {
            name: props
                .device_name_as_c_str()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            vendor_id: props.vendor_id,
            device_id: props.device_id,
            device_type: format!("{:?}", props.device_type),
            api_version: version_string(props.api_version),
            queue_families: families
                .iter()
                .map(|f| QueueFamilySummary {
                    flags: format!("{:?}", f.queue_flags),
                    queue_count: f.queue_count,
                })
                .collect(),
        });
    }

    if summaries.is_empty() {
        bail!("driver reported no physical devices");
    }
    Ok(summaries)
}
